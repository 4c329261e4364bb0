pub mod error;
pub mod item;
pub mod locale;
pub mod response;
pub mod snapshot;
