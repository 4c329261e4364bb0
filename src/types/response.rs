use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{error::AppError, item::Item};
use actix_web::{HttpResponse, Responder};

/// Snapshot id reported when storage could not assign one.
pub const UNASSIGNED_SNAPSHOT_ID: i32 = -1;

/// Capture date reported when there is no snapshot to take it from.
pub const MISSING_CAPTURE_DATE: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// The body every snapshot operation answers with, found or not.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub message: String,
    pub snapshot_id: i32,
    pub capture_date: DateTime<Utc>,
    pub items: Vec<Item>,
}

impl Envelope {
    /// Envelope for an operation that had no snapshot to report on.
    pub fn missing(message: String, snapshot_id: i32, items: Vec<Item>) -> Self {
        Envelope {
            message,
            snapshot_id,
            capture_date: MISSING_CAPTURE_DATE,
            items,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.capture_date == MISSING_CAPTURE_DATE
    }
}

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
