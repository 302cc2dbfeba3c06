use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::error::{AppError, Res};

use crate::{Store, dtos::serial::SerialCreateRequest, models::serial::SerialKeyRecord, poisoned};

/// Insertion-ordered records plus a key index. Records are never removed,
/// so stored positions stay valid.
#[derive(Debug, Default)]
pub(crate) struct SerialTable {
    records: Vec<SerialKeyRecord>,
    index: HashMap<String, usize>,
}

impl SerialTable {
    fn contains(&self, serial_key: &str) -> bool {
        self.index.contains_key(serial_key)
    }

    fn get_mut(&mut self, serial_key: &str) -> Option<&mut SerialKeyRecord> {
        let position = *self.index.get(serial_key)?;
        self.records.get_mut(position)
    }
}

pub fn serial_exists(store: &Store, serial_key: &str) -> Res<bool> {
    let table = store.serials.read().map_err(poisoned)?;
    Ok(table.contains(serial_key))
}

pub fn count_serials(store: &Store) -> Res<usize> {
    let table = store.serials.read().map_err(poisoned)?;
    Ok(table.records.len())
}

pub fn get_serials(store: &Store) -> Res<Vec<SerialKeyRecord>> {
    let table = store.serials.read().map_err(poisoned)?;
    Ok(table.records.clone())
}

/// Appends a fresh active record. The duplicate check and the append share
/// one write guard.
pub fn insert_serial(store: &Store, data: SerialCreateRequest) -> Res<SerialKeyRecord> {
    let mut table = store.serials.write().map_err(poisoned)?;
    if table.contains(&data.serial_key) {
        return Err(AppError::Duplicate);
    }

    let record = SerialKeyRecord {
        serial_key: data.serial_key,
        created_at: data.created_at,
        is_active: true,
        description: data.description,
        expiry_date: data.expiry_date,
        max_uses: data.max_uses,
        current_uses: 0,
    };

    let position = table.records.len();
    table.index.insert(record.serial_key.clone(), position);
    table.records.push(record.clone());
    Ok(record)
}

/// Runs the read-time gates and spends one use if they all pass.
///
/// Check and increment happen under the same write guard, so concurrent
/// callers can never push `current_uses` past `max_uses`.
pub fn consume_serial(store: &Store, serial_key: &str, now: DateTime<Utc>) -> Res<SerialKeyRecord> {
    let mut table = store.serials.write().map_err(poisoned)?;
    let record = table.get_mut(serial_key).ok_or(AppError::UnknownSerial)?;

    record.ensure_usable(now)?;
    record.current_uses += 1;
    Ok(record.clone())
}

/// Idempotent, there is no way back to active.
pub fn deactivate_serial(store: &Store, serial_key: &str) -> Res<SerialKeyRecord> {
    let mut table = store.serials.write().map_err(poisoned)?;
    let record = table
        .get_mut(serial_key)
        .ok_or_else(|| AppError::NotFound("Serial key".to_string()))?;

    record.is_active = false;
    Ok(record.clone())
}
