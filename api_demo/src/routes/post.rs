use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use chrono::Utc;
use common::{
    error::Res,
    http::{Data, Listing, Success},
};
use db::Store;

use crate::dtos::post::{CreatePostRequest, PostFilter, UpdatePostRequest};

/// Lists posts, `?author_id=` narrows the result.
#[get("")]
pub async fn get_posts(
    store: web::Data<Arc<Store>>,
    query: web::Query<PostFilter>,
) -> Res<impl Responder> {
    let posts = db::post::get_posts(&store, query.author_id)?;
    let message = format!("{} posts found", posts.len());
    Success::ok(&message, Listing::new(posts))
}

#[get("/{post_id}")]
pub async fn get_post(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let post = db::post::get_post_by_id(&store, path.into_inner())?;
    Success::ok("Post found", Data { data: post })
}

/// Creates a post for an existing author.
#[post("")]
pub async fn post_post(
    store: web::Data<Arc<Store>>,
    req: web::Json<CreatePostRequest>,
) -> Res<impl Responder> {
    let data = req.into_inner().validate(Utc::now())?;
    let post = db::post::insert_post(&store, data)?;
    log::info!("Post {} created by user {}", post.id, post.author_id);
    Success::created("Post created successfully", Data { data: post })
}

#[put("/{post_id}")]
pub async fn put_post(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
    req: web::Json<UpdatePostRequest>,
) -> Res<impl Responder> {
    let post = db::post::update_post(&store, path.into_inner(), req.into_inner().into())?;
    Success::ok("Post updated successfully", Data { data: post })
}

#[post("/{post_id}/like")]
pub async fn post_like(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let post = db::post::like_post(&store, path.into_inner())?;
    Success::ok("Post liked", Data { data: post })
}

#[delete("/{post_id}")]
pub async fn delete_post(
    store: web::Data<Arc<Store>>,
    path: web::Path<u32>,
) -> Res<impl Responder> {
    let post = db::post::delete_post(&store, path.into_inner())?;
    log::info!("Post {} deleted", post.id);
    Success::ok("Post deleted successfully", Data { data: post })
}
