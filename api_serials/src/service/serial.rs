use chrono::{DateTime, Utc};
use common::{
    admin::AdminGate,
    datetime::parse_timestamp,
    error::{AppError, Res},
    serial::{generate_serial, is_valid_serial_format, normalize_serial},
};
use db::{Store, dtos::serial::SerialCreateRequest};

use crate::dtos::serial::{
    AddSerialRequest, AddedSerial, CheckedSerial, DeactivatedSerial, SerialListItem,
};

/// Registers a new serial key.
///
/// # Arguments
///
/// * `store` - The in-memory store.
/// * `gate` - The admin credential check.
/// * `req` - The request; a missing `serial_key` means one is generated.
/// * `now` - Creation time, also the reference point for the expiry check.
///
/// # Returns
///
/// The stored key without its usage counters, or an `AppError` describing the
/// first check that failed: credentials, format, `max_uses`, duplicate, expiry.
pub(crate) fn add_serial(
    store: &Store,
    gate: &AdminGate,
    req: AddSerialRequest,
    now: DateTime<Utc>,
) -> Res<AddedSerial> {
    gate.verify(req.password.as_deref())?;

    let serial_key = match req.serial_key.filter(|key| !key.is_empty()) {
        Some(raw) => {
            let serial_key = normalize_serial(&raw);
            if !is_valid_serial_format(&serial_key) {
                return Err(AppError::InvalidFormat);
            }
            serial_key
        }
        None => generate_serial(),
    };

    let max_uses = req.max_uses.unwrap_or(1);
    if max_uses == 0 {
        return Err(AppError::InvalidMaxUses);
    }

    if db::serial::serial_exists(store, &serial_key)? {
        return Err(AppError::Duplicate);
    }

    let expiry_date = req
        .expiry_date
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_timestamp(&raw))
        .transpose()?;
    if expiry_date.is_some_and(|expiry| expiry <= now) {
        return Err(AppError::PastExpiry);
    }

    let record = db::serial::insert_serial(
        store,
        SerialCreateRequest {
            serial_key,
            created_at: now,
            description: req.description.unwrap_or_default(),
            expiry_date,
            max_uses,
        },
    )?;

    log::info!(
        "Serial key {} added (max_uses={}, expires={})",
        record.serial_key,
        record.max_uses,
        record
            .expiry_date
            .map_or("never".to_string(), |expiry| expiry.to_rfc3339())
    );
    Ok(record.into())
}

/// Checks a key and spends one of its uses when it is valid.
///
/// The format is checked before any lookup. A valid key comes back with its
/// counters already reflecting this check.
pub(crate) fn check_serial(store: &Store, raw_key: &str, now: DateTime<Utc>) -> Res<CheckedSerial> {
    let serial_key = normalize_serial(raw_key);
    if !is_valid_serial_format(&serial_key) {
        return Err(AppError::InvalidFormat);
    }

    let record = db::serial::consume_serial(store, &serial_key, now)?;
    Ok(record.into())
}

/// Every key in insertion order with its remaining uses.
pub(crate) fn list_serials(
    store: &Store,
    gate: &AdminGate,
    password: Option<&str>,
) -> Res<Vec<SerialListItem>> {
    gate.verify(password)?;

    let records = db::serial::get_serials(store)?;
    Ok(records.into_iter().map(SerialListItem::from).collect())
}

/// Permanently disables a key. Any stored key is accepted, the format is not
/// re-validated.
pub(crate) fn deactivate_serial(
    store: &Store,
    gate: &AdminGate,
    raw_key: &str,
    password: Option<&str>,
) -> Res<DeactivatedSerial> {
    gate.verify(password)?;

    let record = db::serial::deactivate_serial(store, &normalize_serial(raw_key))?;
    log::info!("Serial key {} deactivated", record.serial_key);

    Ok(DeactivatedSerial {
        serial_key: record.serial_key,
        is_active: record.is_active,
    })
}
