use actix_web::{HttpResponse, Responder, error::JsonPayloadError, web};
use serde::Serialize;

use crate::error::{AppError, Res};

/// `{ "success": true, "message": ..., <body fields> }`
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    message: &'a str,
    #[serde(flatten)]
    body: T,
}

/// Body carrying a single `data` field.
#[derive(Debug, Serialize)]
pub struct Data<T: Serialize> {
    pub data: T,
}

/// Body carrying a list and its length.
#[derive(Debug, Serialize)]
pub struct Listing<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> Listing<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Listing { data, count }
    }
}

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(message: &str, body: T) -> Res<impl Responder + use<T>> {
        Result::Ok(HttpResponse::Created().json(Envelope {
            success: true,
            message,
            body,
        }))
    }
    pub fn ok<T: Serialize>(message: &str, body: T) -> Res<impl Responder + use<T>> {
        Result::Ok(HttpResponse::Ok().json(Envelope {
            success: true,
            message,
            body,
        }))
    }
}

/// Extractor config turning JSON payload failures into `AppError` envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = match &err {
            JsonPayloadError::ContentType => AppError::NoDataProvided,
            JsonPayloadError::Deserialize(e) if e.is_eof() => AppError::NoDataProvided,
            other => AppError::Internal(other.to_string()),
        };
        app_error.into()
    })
}

/// Path segments that fail to parse, e.g. `/users/abc`, become a 400 envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid path: {err}")).into())
}

/// Query strings that fail to deserialize become a 400 envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid query: {err}")).into())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    AppError::NotFound("Endpoint".to_string()).to_http_response()
}
