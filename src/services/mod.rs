pub mod fridge_content;

pub use fridge_content::FridgeContentService;
