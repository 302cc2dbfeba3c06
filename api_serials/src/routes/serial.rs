use std::sync::Arc;

use actix_web::{
    Responder, get, post,
    web::{self},
};
use chrono::Utc;
use common::{
    admin::AdminGate,
    error::Res,
    http::{Data, Listing, Success},
};
use db::Store;

use crate::{
    dtos::serial::{AddSerialRequest, AdminRequest, Verdict},
    service,
};

/// Adds a serial key, either the one supplied or a freshly generated one.
///
/// # Arguments
///
/// * `store` - The in-memory store.
/// * `gate` - The admin credential check.
/// * `req` - Password plus optional `serial_key`, `description`, `expiry_date`, `max_uses`.
///
/// # Returns
///
/// `201 Created` with the stored key, or an `AppError` if an error occurs.
#[post("/add-serial")]
pub async fn post_add_serial(
    store: web::Data<Arc<Store>>,
    gate: web::Data<AdminGate>,
    req: web::Json<AddSerialRequest>,
) -> Res<impl Responder> {
    let added = service::serial::add_serial(&store, &gate, req.into_inner(), Utc::now())?;
    Success::created("Serial key added successfully", Data { data: added })
}

/// Checks a serial key. Every successful check consumes one use.
///
/// # Arguments
///
/// * `store` - The in-memory store.
/// * `path` - The key to check, in any letter case.
///
/// # Returns
///
/// The key with its updated counters, or an `AppError` carrying `is_valid: false`.
#[get("/check-serial/{serial_key}")]
pub async fn get_check_serial(
    store: web::Data<Arc<Store>>,
    path: web::Path<String>,
) -> Res<impl Responder> {
    let checked = service::serial::check_serial(&store, &path, Utc::now())?;
    Success::ok(
        "Serial key is valid",
        Verdict {
            is_valid: true,
            data: checked,
        },
    )
}

/// Lists every serial key in the order they were added.
///
/// # Arguments
///
/// * `store` - The in-memory store.
/// * `gate` - The admin credential check.
/// * `req` - The admin password.
///
/// # Returns
///
/// The keys and their count, or an `AppError` if an error occurs.
#[post("/list-serials")]
pub async fn post_list_serials(
    store: web::Data<Arc<Store>>,
    gate: web::Data<AdminGate>,
    req: web::Json<AdminRequest>,
) -> Res<impl Responder> {
    let keys = service::serial::list_serials(&store, &gate, req.password.as_deref())?;
    let message = format!("{} serial keys found", keys.len());
    Success::ok(&message, Listing::new(keys))
}

/// Deactivates a serial key for good.
///
/// # Arguments
///
/// * `store` - The in-memory store.
/// * `gate` - The admin credential check.
/// * `path` - The key to deactivate.
/// * `req` - The admin password.
///
/// # Returns
///
/// The key with `is_active: false`, or an `AppError` if an error occurs.
#[post("/deactivate-serial/{serial_key}")]
pub async fn post_deactivate_serial(
    store: web::Data<Arc<Store>>,
    gate: web::Data<AdminGate>,
    path: web::Path<String>,
    req: web::Json<AdminRequest>,
) -> Res<impl Responder> {
    let deactivated =
        service::serial::deactivate_serial(&store, &gate, &path, req.password.as_deref())?;
    Success::ok("Serial key deactivated", Data { data: deactivated })
}
