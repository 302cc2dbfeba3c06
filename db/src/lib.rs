use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use common::error::AppError;

use crate::{
    models::{post::Post, product::Product, user::User},
    serial::SerialTable,
};

pub mod post;
pub mod product;
pub mod serial;
pub mod user;

pub mod models {
    pub mod post;
    pub mod product;
    pub mod serial;
    pub mod user;
}

pub mod dtos {
    pub mod post;
    pub mod product;
    pub mod serial;
    pub mod user;
}

mod seed;

/// In-memory state shared by every worker for the lifetime of the process.
///
/// Each table sits behind its own lock. Operations touching two tables
/// always lock `users` before `posts`.
#[derive(Default)]
pub struct Store {
    serials: RwLock<SerialTable>,
    users: RwLock<Vec<User>>,
    products: RwLock<Vec<Product>>,
    posts: RwLock<Vec<Post>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Empty serial registry, demo tables filled with sample rows.
    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        Store {
            serials: RwLock::default(),
            users: RwLock::new(seed::users(now)),
            products: RwLock::new(seed::products(now)),
            posts: RwLock::new(seed::posts(now)),
        }
    }
}

pub fn setup(seed_demo_data: bool) -> Arc<Store> {
    let store = if seed_demo_data {
        Store::with_demo_data(Utc::now())
    } else {
        Store::new()
    };
    log::info!(
        "In-memory store ready (demo data: {})",
        if seed_demo_data { "seeded" } else { "empty" }
    );
    Arc::new(store)
}

pub(crate) fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::Internal("Store lock poisoned".to_string())
}

pub(crate) fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}
