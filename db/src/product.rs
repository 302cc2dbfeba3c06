use common::error::{AppError, Res};

use crate::{
    Store,
    dtos::product::{ProductCreateRequest, ProductUpdateRequest},
    models::product::Product,
    next_id, poisoned,
};

fn not_found() -> AppError {
    AppError::NotFound("Product".to_string())
}

pub fn get_products(store: &Store, category: Option<&str>) -> Res<Vec<Product>> {
    let products = store.products.read().map_err(poisoned)?;
    Ok(products
        .iter()
        .filter(|product| category.is_none_or(|c| product.category.eq_ignore_ascii_case(c)))
        .cloned()
        .collect())
}

pub fn get_product_by_id(store: &Store, product_id: u32) -> Res<Product> {
    let products = store.products.read().map_err(poisoned)?;
    products
        .iter()
        .find(|product| product.id == product_id)
        .cloned()
        .ok_or_else(not_found)
}

pub fn insert_product(store: &Store, data: ProductCreateRequest) -> Res<Product> {
    let mut products = store.products.write().map_err(poisoned)?;
    let product = Product {
        id: next_id(products.iter().map(|product| product.id)),
        name: data.name,
        price: data.price,
        category: data.category,
        stock: data.stock,
        description: data.description,
        created_at: data.created_at,
    };
    products.push(product.clone());
    Ok(product)
}

pub fn update_product(store: &Store, product_id: u32, data: ProductUpdateRequest) -> Res<Product> {
    let mut products = store.products.write().map_err(poisoned)?;
    let product = products
        .iter_mut()
        .find(|product| product.id == product_id)
        .ok_or_else(not_found)?;

    if let Some(name) = data.name {
        product.name = name;
    }
    if let Some(price) = data.price {
        product.price = price;
    }
    if let Some(category) = data.category {
        product.category = category;
    }
    if let Some(stock) = data.stock {
        product.stock = stock;
    }
    if let Some(description) = data.description {
        product.description = description;
    }
    Ok(product.clone())
}

pub fn delete_product(store: &Store, product_id: u32) -> Res<Product> {
    let mut products = store.products.write().map_err(poisoned)?;
    let position = products
        .iter()
        .position(|product| product.id == product_id)
        .ok_or_else(not_found)?;
    Ok(products.remove(position))
}
