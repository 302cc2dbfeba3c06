use chrono::{DateTime, Utc};

use crate::models::{post::Post, product::Product, user::User};

pub(crate) fn users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: Some(30),
            city: Some("New York".to_string()),
            created_at: now,
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            age: Some(25),
            city: Some("Los Angeles".to_string()),
            created_at: now,
        },
        User {
            id: 3,
            name: "Bob Johnson".to_string(),
            email: "bob@example.com".to_string(),
            age: Some(35),
            city: Some("Chicago".to_string()),
            created_at: now,
        },
    ]
}

pub(crate) fn products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
            category: "Electronics".to_string(),
            stock: 50,
            description: "High-performance laptop".to_string(),
            created_at: now,
        },
        Product {
            id: 2,
            name: "Coffee Mug".to_string(),
            price: 12.99,
            category: "Kitchen".to_string(),
            stock: 100,
            description: "Ceramic coffee mug".to_string(),
            created_at: now,
        },
        Product {
            id: 3,
            name: "Running Shoes".to_string(),
            price: 89.99,
            category: "Sports".to_string(),
            stock: 25,
            description: "Lightweight running shoes".to_string(),
            created_at: now,
        },
    ]
}

pub(crate) fn posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Getting Started with REST".to_string(),
            content: "Resources, verbs and status codes are all you need to begin.".to_string(),
            author_id: 1,
            likes: 15,
            created_at: now,
        },
        Post {
            id: 2,
            title: "REST API Best Practices".to_string(),
            content: "Keep endpoints resource oriented and status codes honest.".to_string(),
            author_id: 2,
            likes: 23,
            created_at: now,
        },
        Post {
            id: 3,
            title: "Working with JSON".to_string(),
            content: "JSON is the lingua franca of web APIs.".to_string(),
            author_id: 1,
            likes: 8,
            created_at: now,
        },
    ]
}
