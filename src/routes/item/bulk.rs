use actix_web::{delete, get, post, web};

use crate::services::FridgeContentService;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::utils::webutils::request_locale;

#[post("")]
async fn save_items(
    req: actix_web::HttpRequest,
    service: web::Data<FridgeContentService>,
    body: web::Json<Vec<Item>>,
) -> ApiResult<Envelope> {
    let locale = request_locale(&req);
    let envelope = service.save_items(body.into_inner(), &locale).await?;

    Ok(ApiResponse::Ok(envelope))
}

/// Not-found is reported in the body, the status stays 200.
#[get("/{snapshot_id}")]
async fn get_items(
    req: actix_web::HttpRequest,
    service: web::Data<FridgeContentService>,
    path: web::Path<i32>,
) -> ApiResult<Envelope> {
    let locale = request_locale(&req);
    let envelope = service.get_items_with_context(path.into_inner(), &locale).await?;

    Ok(ApiResponse::Ok(envelope))
}

#[delete("/{snapshot_id}")]
async fn delete_items(
    req: actix_web::HttpRequest,
    service: web::Data<FridgeContentService>,
    path: web::Path<i32>,
) -> ApiResult<Envelope> {
    let locale = request_locale(&req);
    let envelope = service.delete_items(path.into_inner(), &locale).await?;

    Ok(ApiResponse::Ok(envelope))
}
