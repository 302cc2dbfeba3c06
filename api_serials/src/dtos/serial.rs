use chrono::{DateTime, Utc};
use db::models::serial::SerialKeyRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddSerialRequest {
    pub password: Option<String>,
    pub serial_key: Option<String>,
    pub description: Option<String>,
    pub expiry_date: Option<String>,
    pub max_uses: Option<u32>,
}

/// Body of every admin call that carries nothing but the password.
#[derive(Debug, Deserialize)]
pub struct AdminRequest {
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddedSerial {
    pub serial_key: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub max_uses: u32,
}

impl From<SerialKeyRecord> for AddedSerial {
    fn from(record: SerialKeyRecord) -> Self {
        AddedSerial {
            serial_key: record.serial_key,
            created_at: record.created_at,
            description: record.description,
            expiry_date: record.expiry_date,
            max_uses: record.max_uses,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckedSerial {
    pub serial_key: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub max_uses: u32,
    pub current_uses: u32,
    pub remaining_uses: u32,
}

impl From<SerialKeyRecord> for CheckedSerial {
    fn from(record: SerialKeyRecord) -> Self {
        let remaining_uses = record.remaining_uses();
        CheckedSerial {
            serial_key: record.serial_key,
            created_at: record.created_at,
            description: record.description,
            expiry_date: record.expiry_date,
            max_uses: record.max_uses,
            current_uses: record.current_uses,
            remaining_uses,
        }
    }
}

/// `{ "is_valid": true, "data": ... }` part of a successful check.
#[derive(Debug, Serialize)]
pub struct Verdict<T: Serialize> {
    pub is_valid: bool,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct SerialListItem {
    pub serial_key: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub is_active: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    pub max_uses: u32,
    pub current_uses: u32,
    pub remaining_uses: u32,
}

impl From<SerialKeyRecord> for SerialListItem {
    fn from(record: SerialKeyRecord) -> Self {
        let remaining_uses = record.remaining_uses();
        SerialListItem {
            serial_key: record.serial_key,
            created_at: record.created_at,
            description: record.description,
            is_active: record.is_active,
            expiry_date: record.expiry_date,
            max_uses: record.max_uses,
            current_uses: record.current_uses,
            remaining_uses,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeactivatedSerial {
    pub serial_key: String,
    pub is_active: bool,
}
