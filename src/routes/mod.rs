use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::types::error::AppError;

pub mod health;
pub mod item;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/v1/item/bulk")
            .service(item::bulk::save_items)
            .service(item::bulk::get_items)
            .service(item::bulk::delete_items)
    );
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
