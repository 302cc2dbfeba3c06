use chrono::{DateTime, Utc};

pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct UserUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
}
