use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use db::dtos::user::{UserCreateRequest, UserUpdateRequest};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserFilter {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self, now: DateTime<Utc>) -> Res<UserCreateRequest> {
        let name = non_blank(self.name);
        let email = non_blank(self.email);
        let (Some(name), Some(email)) = (name, email) else {
            return Err(AppError::BadRequest("Name and email are required".to_string()));
        };
        check_email(&email)?;

        Ok(UserCreateRequest {
            name,
            email,
            age: self.age,
            city: non_blank(self.city),
            created_at: now,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(self) -> Res<UserUpdateRequest> {
        let email = non_blank(self.email);
        if let Some(email) = &email {
            check_email(email)?;
        }

        Ok(UserUpdateRequest {
            name: non_blank(self.name),
            email,
            age: self.age,
            city: non_blank(self.city),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_email(email: &str) -> Res<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::BadRequest("Invalid email address".to_string())),
    }
}
