use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use db::dtos::post::{PostCreateRequest, PostUpdateRequest};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PostFilter {
    pub author_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<u32>,
}

impl CreatePostRequest {
    pub fn validate(self, now: DateTime<Utc>) -> Res<PostCreateRequest> {
        let title = self.title.filter(|title| !title.trim().is_empty());
        let content = self.content.filter(|content| !content.trim().is_empty());
        let (Some(title), Some(content), Some(author_id)) = (title, content, self.author_id) else {
            return Err(AppError::BadRequest(
                "Title, content and author_id are required".to_string(),
            ));
        };

        Ok(PostCreateRequest {
            title,
            content,
            author_id,
            created_at: now,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostUpdateRequest {
    fn from(req: UpdatePostRequest) -> Self {
        PostUpdateRequest {
            title: req.title.filter(|title| !title.trim().is_empty()),
            content: req.content.filter(|content| !content.trim().is_empty()),
        }
    }
}
