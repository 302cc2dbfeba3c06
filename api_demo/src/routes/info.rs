use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// Describes the demo CRUD endpoints.
#[get("")]
pub async fn get_api_info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Demo CRUD API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": {
                "list": "GET /api/users?city=<city>",
                "get": "GET /api/users/<id>",
                "create": "POST /api/users",
                "update": "PUT /api/users/<id>",
                "delete": "DELETE /api/users/<id>"
            },
            "products": {
                "list": "GET /api/products?category=<category>",
                "get": "GET /api/products/<id>",
                "create": "POST /api/products",
                "update": "PUT /api/products/<id>",
                "delete": "DELETE /api/products/<id>"
            },
            "posts": {
                "list": "GET /api/posts?author_id=<id>",
                "get": "GET /api/posts/<id>",
                "create": "POST /api/posts",
                "update": "PUT /api/posts/<id>",
                "like": "POST /api/posts/<id>/like",
                "delete": "DELETE /api/posts/<id>"
            }
        }
    }))
}
