use chrono::{DateTime, Utc};

pub struct ProductCreateRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct ProductUpdateRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}
