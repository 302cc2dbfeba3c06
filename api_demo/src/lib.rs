use actix_web::web::{self};

pub mod routes {
    pub mod info;
    pub mod post;
    pub mod product;
    pub mod user;
}

mod dtos {
    pub(crate) mod post;
    pub(crate) mod product;
    pub(crate) mod user;
}

pub fn mount_users() -> actix_web::Scope {
    web::scope("/users")
        .service(routes::user::get_users)
        .service(routes::user::get_user)
        .service(routes::user::post_user)
        .service(routes::user::put_user)
        .service(routes::user::delete_user)
}
pub fn mount_products() -> actix_web::Scope {
    web::scope("/products")
        .service(routes::product::get_products)
        .service(routes::product::get_product)
        .service(routes::product::post_product)
        .service(routes::product::put_product)
        .service(routes::product::delete_product)
}
pub fn mount_posts() -> actix_web::Scope {
    web::scope("/posts")
        .service(routes::post::get_posts)
        .service(routes::post::get_post)
        .service(routes::post::post_post)
        .service(routes::post::put_post)
        .service(routes::post::post_like)
        .service(routes::post::delete_post)
}
/// `GET /api` itself, register it inside the `/api` scope.
pub fn mount_info(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::info::get_api_info);
}
