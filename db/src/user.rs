use common::error::{AppError, Res};

use crate::{
    Store,
    dtos::user::{UserCreateRequest, UserUpdateRequest},
    models::user::User,
    next_id, poisoned,
};

fn not_found() -> AppError {
    AppError::NotFound("User".to_string())
}

fn email_taken(users: &[User], email: &str, except_id: Option<u32>) -> bool {
    users
        .iter()
        .any(|user| Some(user.id) != except_id && user.email.eq_ignore_ascii_case(email))
}

/// All users, optionally narrowed to one city (case-insensitive).
pub fn get_users(store: &Store, city: Option<&str>) -> Res<Vec<User>> {
    let users = store.users.read().map_err(poisoned)?;
    Ok(users
        .iter()
        .filter(|user| match city {
            Some(city) => user
                .city
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(city)),
            None => true,
        })
        .cloned()
        .collect())
}

pub fn get_user_by_id(store: &Store, user_id: u32) -> Res<User> {
    let users = store.users.read().map_err(poisoned)?;
    users
        .iter()
        .find(|user| user.id == user_id)
        .cloned()
        .ok_or_else(not_found)
}

pub fn insert_user(store: &Store, data: UserCreateRequest) -> Res<User> {
    let mut users = store.users.write().map_err(poisoned)?;
    if email_taken(&users, &data.email, None) {
        return Err(AppError::BadRequest("Email already exists".to_string()));
    }

    let user = User {
        id: next_id(users.iter().map(|user| user.id)),
        name: data.name,
        email: data.email,
        age: data.age,
        city: data.city,
        created_at: data.created_at,
    };
    users.push(user.clone());
    Ok(user)
}

pub fn update_user(store: &Store, user_id: u32, data: UserUpdateRequest) -> Res<User> {
    let mut users = store.users.write().map_err(poisoned)?;
    if let Some(email) = &data.email {
        if email_taken(&users, email, Some(user_id)) {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }
    }

    let user = users
        .iter_mut()
        .find(|user| user.id == user_id)
        .ok_or_else(not_found)?;
    if let Some(name) = data.name {
        user.name = name;
    }
    if let Some(email) = data.email {
        user.email = email;
    }
    if let Some(age) = data.age {
        user.age = Some(age);
    }
    if let Some(city) = data.city {
        user.city = Some(city);
    }
    Ok(user.clone())
}

pub fn delete_user(store: &Store, user_id: u32) -> Res<User> {
    let mut users = store.users.write().map_err(poisoned)?;
    let position = users
        .iter()
        .position(|user| user.id == user_id)
        .ok_or_else(not_found)?;
    Ok(users.remove(position))
}
