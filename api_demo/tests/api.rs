use std::sync::Arc;

use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use chrono::Utc;
use common::http::{json_config, not_found, path_config, query_config};
use db::Store;
use serde_json::{Value, json};

macro_rules! test_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::clone(&$store)))
                .app_data(json_config())
                .app_data(path_config())
                .app_data(query_config())
                .service(
                    web::scope("/api")
                        .configure(api_demo::mount_info)
                        .service(api_demo::mount_users())
                        .service(api_demo::mount_products())
                        .service(api_demo::mount_posts()),
                )
                .default_service(web::to(not_found)),
        )
        .await
    };
}

fn seeded() -> Arc<Store> {
    Arc::new(Store::with_demo_data(Utc::now()))
}

#[actix_web::test]
async fn api_info_lists_resources() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(&app, TestRequest::get().uri("/api").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["success"], true);
    assert!(body["endpoints"]["users"].is_object());
    assert!(body["endpoints"]["posts"]["like"].is_string());
}

#[actix_web::test]
async fn users_filter_by_city_ignoring_case() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(&app, TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["message"], "3 users found");

    let res = test::call_service(
        &app,
        TestRequest::get().uri("/api/users?city=chicago").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Bob Johnson");
}

#[actix_web::test]
async fn user_lifecycle() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Ada Lovelace", "email": "ada@example.com", "age": 36 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["id"], 4);

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri("/api/users/4")
            .set_json(json!({ "city": "London" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["city"], "London");
    assert_eq!(body["data"]["name"], "Ada Lovelace");

    let res = test::call_service(&app, TestRequest::delete().uri("/api/users/4").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(&app, TestRequest::get().uri("/api/users/4").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn user_create_rejects_bad_input() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "No Email" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Name and email are required");

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Copy", "email": "JOHN@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Email already exists");

    let res = test::call_service(
        &app,
        TestRequest::post().uri("/api/users").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn products_default_category_and_validate_price() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/products")
            .set_json(json!({ "name": "Desk Lamp", "price": 24.5 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["category"], "General");
    assert_eq!(body["data"]["stock"], 0);

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/products")
            .set_json(json!({ "name": "Refund", "price": -1.0 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/products?category=electronics")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Laptop");

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri("/api/products/2")
            .set_json(json!({ "stock": 7 }))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["stock"], 7);
    assert_eq!(body["data"]["name"], "Coffee Mug");

    let res =
        test::call_service(&app, TestRequest::delete().uri("/api/products/99").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn posts_need_an_existing_author_and_can_be_liked() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(
        &app,
        TestRequest::get().uri("/api/posts?author_id=1").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["count"], 2);

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "Ghost", "content": "Boo", "author_id": 42 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Author not found");

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "Hello", "content": "First post", "author_id": 3 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["likes"], 0);

    let res =
        test::call_service(&app, TestRequest::post().uri("/api/posts/4/like").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["likes"], 1);

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri("/api/posts/4")
            .set_json(json!({ "title": "Hello again" }))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["title"], "Hello again");
    assert_eq!(body["data"]["content"], "First post");
}

#[actix_web::test]
async fn unknown_route_is_a_json_404() {
    let store = seeded();
    let app = test_app!(store);

    let res = test::call_service(&app, TestRequest::get().uri("/api/comments").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Endpoint not found");
}

#[actix_web::test]
async fn unparseable_ids_and_filters_get_a_json_400() {
    let store = seeded();
    let app = test_app!(store);

    for req in [
        TestRequest::get().uri("/api/users/abc"),
        TestRequest::get().uri("/api/posts?author_id=abc"),
        TestRequest::post().uri("/api/posts/xyz/like"),
    ] {
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
    }

    let res = test::call_service(&app, TestRequest::get().uri("/api/posts/1").to_request()).await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["likes"], 15);
}
