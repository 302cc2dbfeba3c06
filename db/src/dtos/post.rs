use chrono::{DateTime, Utc};

pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
    pub author_id: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct PostUpdateRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}
