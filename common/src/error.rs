use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Password hash error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    // === CREDENTIAL ERRORS ===
    #[error("Admin password is required")]
    MissingCredential,

    #[error("Invalid admin password")]
    InvalidCredential,

    // === SERIAL KEY ERRORS ===
    #[error("Invalid serial key format. Format: XXXX-XXXX-XXXX-XXXX")]
    InvalidFormat,

    #[error("This serial key already exists")]
    Duplicate,

    #[error("Invalid date format. Use ISO format: YYYY-MM-DDTHH:MM:SS")]
    InvalidExpiry,

    #[error("Expiry date cannot be in the past")]
    PastExpiry,

    #[error("max_uses must be a positive integer")]
    InvalidMaxUses,

    #[error("Serial key not found")]
    UnknownSerial,

    #[error("Serial key is deactivated")]
    Inactive,

    #[error("Serial key has expired")]
    Expired,

    #[error("Serial key usage limit reached")]
    UsesExhausted,

    // === REQUEST ERRORS ===
    #[error("JSON body is required")]
    NoDataProvided,

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::PasswordHash(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InvalidCredential => StatusCode::UNAUTHORIZED,
            AppError::UnknownSerial | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Failures that answer a key check carry an explicit `is_valid: false`.
    pub fn is_verdict(&self) -> bool {
        matches!(
            self,
            AppError::UnknownSerial
                | AppError::Inactive
                | AppError::Expired
                | AppError::UsesExhausted
        )
    }

    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "success": false, "message": err_msg })
            } else {
                serde_json::json!({ "success": false, "message": "Internal server error" })
            }
        };

        match self {
            // === CONVERSION ERRORS ===
            AppError::PasswordHash(error) => {
                log::error!("Password hash error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(error.as_str()))
            }

            // === APPLICATION ERRORS ===
            _ => {
                let mut body = serde_json::json!({
                    "success": false,
                    "message": self.to_string(),
                });
                if self.is_verdict() {
                    body["is_valid"] = serde_json::Value::Bool(false);
                }
                HttpResponse::build(self.status()).json(body)
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}
