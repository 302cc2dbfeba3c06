use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SerialKeyRecord {
    pub serial_key: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub description: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub max_uses: u32,
    pub current_uses: u32,
}

impl SerialKeyRecord {
    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.current_uses)
    }

    /// A key stops being valid at its expiry instant, not after it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry <= now)
    }

    /// Read-time gates, in the order a check reports them.
    pub fn ensure_usable(&self, now: DateTime<Utc>) -> Res<()> {
        if !self.is_active {
            return Err(AppError::Inactive);
        }
        if self.is_expired_at(now) {
            return Err(AppError::Expired);
        }
        if self.current_uses >= self.max_uses {
            return Err(AppError::UsesExhausted);
        }
        Ok(())
    }
}
