use chrono::{DateTime, Utc};

pub struct SerialCreateRequest {
    pub serial_key: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub max_uses: u32,
}
