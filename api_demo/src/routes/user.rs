use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use chrono::Utc;
use common::{
    error::Res,
    http::{Data, Listing, Success},
};
use db::Store;

use crate::dtos::user::{CreateUserRequest, UpdateUserRequest, UserFilter};

/// Lists users, `?city=` narrows the result.
#[get("")]
pub async fn get_users(
    store: web::Data<Arc<Store>>,
    query: web::Query<UserFilter>,
) -> Res<impl Responder> {
    let users = db::user::get_users(&store, query.city.as_deref())?;
    let message = format!("{} users found", users.len());
    Success::ok(&message, Listing::new(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let user = db::user::get_user_by_id(&store, path.into_inner())?;
    Success::ok("User found", Data { data: user })
}

/// Creates a user. `name` and `email` are required, emails are unique.
#[post("")]
pub async fn post_user(
    store: web::Data<Arc<Store>>,
    req: web::Json<CreateUserRequest>,
) -> Res<impl Responder> {
    let data = req.into_inner().validate(Utc::now())?;
    let user = db::user::insert_user(&store, data)?;
    log::info!("User {} created", user.id);
    Success::created("User created successfully", Data { data: user })
}

/// Partial update, absent fields stay untouched.
#[put("/{user_id}")]
pub async fn put_user(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
    req: web::Json<UpdateUserRequest>,
) -> Res<impl Responder> {
    let data = req.into_inner().validate()?;
    let user = db::user::update_user(&store, path.into_inner(), data)?;
    Success::ok("User updated successfully", Data { data: user })
}

#[delete("/{user_id}")]
pub async fn delete_user(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let user = db::user::delete_user(&store, path.into_inner())?;
    log::info!("User {} deleted", user.id);
    Success::ok("User deleted successfully", Data { data: user })
}
