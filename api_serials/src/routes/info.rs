use std::sync::Arc;

use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use common::error::Res;
use db::Store;
use serde_json::json;

const SERVICE_NAME: &str = "Serial Key Management API";

/// Service name, version and where each serial key endpoint lives.
#[get("/")]
pub async fn get_home() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "add_serial": "POST /api/add-serial",
            "check_serial": "GET /api/check-serial/<serial_key>",
            "list_serials": "POST /api/list-serials",
            "deactivate_serial": "POST /api/deactivate-serial/<serial_key>",
            "admin_info": "GET /api/admin-info",
            "health": "GET /health"
        }
    }))
}

/// Usage instructions for the admin endpoints.
#[get("/admin-info")]
pub async fn get_admin_info(store: web::Data<Arc<Store>>) -> Res<impl Responder> {
    let current_serial_count = db::serial::count_serials(&store)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": SERVICE_NAME,
        "admin_instructions": {
            "add_serial": {
                "method": "POST",
                "endpoint": "/api/add-serial",
                "required_fields": ["password"],
                "optional_fields": ["serial_key", "description", "expiry_date", "max_uses"],
                "example": {
                    "password": "<admin password>",
                    "description": "Premium customer",
                    "expiry_date": "2030-12-31T23:59:59",
                    "max_uses": 5
                }
            },
            "check_serial": {
                "method": "GET",
                "endpoint": "/api/check-serial/<serial_key>",
                "example": "/api/check-serial/ABCD-1234-EFGH-5678"
            },
            "list_serials": {
                "method": "POST",
                "endpoint": "/api/list-serials",
                "body": { "password": "<admin password>" }
            },
            "deactivate_serial": {
                "method": "POST",
                "endpoint": "/api/deactivate-serial/<serial_key>",
                "body": { "password": "<admin password>" }
            }
        },
        "serial_format": "XXXX-XXXX-XXXX-XXXX (16 characters, uppercase letters and digits)",
        "current_serial_count": current_serial_count
    })))
}

/// Liveness probe reporting how many keys the registry holds.
#[get("/health")]
pub async fn get_health(store: web::Data<Arc<Store>>) -> Res<impl Responder> {
    let serial_keys_count = db::serial::count_serials(&store)?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "serial_keys_count": serial_keys_count
    })))
}
