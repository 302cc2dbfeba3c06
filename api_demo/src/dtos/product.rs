use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use db::dtos::product::{ProductCreateRequest, ProductUpdateRequest};
use serde::Deserialize;

const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(self, now: DateTime<Utc>) -> Res<ProductCreateRequest> {
        let name = self.name.filter(|name| !name.trim().is_empty());
        let (Some(name), Some(price)) = (name, self.price) else {
            return Err(AppError::BadRequest("Name and price are required".to_string()));
        };
        check_price(price)?;

        Ok(ProductCreateRequest {
            name,
            price,
            category: self
                .category
                .filter(|category| !category.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            stock: self.stock.unwrap_or(0),
            description: self.description.unwrap_or_default(),
            created_at: now,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl UpdateProductRequest {
    pub fn validate(self) -> Res<ProductUpdateRequest> {
        if let Some(price) = self.price {
            check_price(price)?;
        }

        Ok(ProductUpdateRequest {
            name: self.name.filter(|name| !name.trim().is_empty()),
            price: self.price,
            category: self.category.filter(|category| !category.trim().is_empty()),
            stock: self.stock,
            description: self.description,
        })
    }
}

fn check_price(price: f64) -> Res<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest("Price must be a non-negative number".to_string()))
    }
}
