use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use chrono::Utc;
use common::{
    error::Res,
    http::{Data, Listing, Success},
};
use db::Store;

use crate::dtos::product::{CreateProductRequest, ProductFilter, UpdateProductRequest};

/// Lists products, `?category=` narrows the result.
#[get("")]
pub async fn get_products(
    store: web::Data<Arc<Store>>,
    query: web::Query<ProductFilter>,
) -> Res<impl Responder> {
    let products = db::product::get_products(&store, query.category.as_deref())?;
    let message = format!("{} products found", products.len());
    Success::ok(&message, Listing::new(products))
}

#[get("/{product_id}")]
pub async fn get_product(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let product = db::product::get_product_by_id(&store, path.into_inner())?;
    Success::ok("Product found", Data { data: product })
}

#[post("")]
pub async fn post_product(
    store: web::Data<Arc<Store>>,
    req: web::Json<CreateProductRequest>,
) -> Res<impl Responder> {
    let data = req.into_inner().validate(Utc::now())?;
    let product = db::product::insert_product(&store, data)?;
    log::info!("Product {} created", product.id);
    Success::created("Product created successfully", Data { data: product })
}

#[put("/{product_id}")]
pub async fn put_product(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
    req: web::Json<UpdateProductRequest>,
) -> Res<impl Responder> {
    let data = req.into_inner().validate()?;
    let product = db::product::update_product(&store, path.into_inner(), data)?;
    Success::ok("Product updated successfully", Data { data: product })
}

#[delete("/{product_id}")]
pub async fn delete_product(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let product = db::product::delete_product(&store, path.into_inner())?;
    log::info!("Product {} deleted", product.id);
    Success::ok("Product deleted successfully", Data { data: product })
}
