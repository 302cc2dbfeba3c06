use common::error::{AppError, Res};

use crate::{
    Store,
    dtos::post::{PostCreateRequest, PostUpdateRequest},
    models::post::Post,
    next_id, poisoned,
};

fn not_found() -> AppError {
    AppError::NotFound("Post".to_string())
}

pub fn get_posts(store: &Store, author_id: Option<u32>) -> Res<Vec<Post>> {
    let posts = store.posts.read().map_err(poisoned)?;
    Ok(posts
        .iter()
        .filter(|post| author_id.is_none_or(|id| post.author_id == id))
        .cloned()
        .collect())
}

pub fn get_post_by_id(store: &Store, post_id: u32) -> Res<Post> {
    let posts = store.posts.read().map_err(poisoned)?;
    posts
        .iter()
        .find(|post| post.id == post_id)
        .cloned()
        .ok_or_else(not_found)
}

/// The author has to exist when the post is written.
pub fn insert_post(store: &Store, data: PostCreateRequest) -> Res<Post> {
    let users = store.users.read().map_err(poisoned)?;
    if !users.iter().any(|user| user.id == data.author_id) {
        return Err(AppError::BadRequest("Author not found".to_string()));
    }

    let mut posts = store.posts.write().map_err(poisoned)?;
    let post = Post {
        id: next_id(posts.iter().map(|post| post.id)),
        title: data.title,
        content: data.content,
        author_id: data.author_id,
        likes: 0,
        created_at: data.created_at,
    };
    posts.push(post.clone());
    Ok(post)
}

pub fn update_post(store: &Store, post_id: u32, data: PostUpdateRequest) -> Res<Post> {
    let mut posts = store.posts.write().map_err(poisoned)?;
    let post = posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or_else(not_found)?;

    if let Some(title) = data.title {
        post.title = title;
    }
    if let Some(content) = data.content {
        post.content = content;
    }
    Ok(post.clone())
}

pub fn like_post(store: &Store, post_id: u32) -> Res<Post> {
    let mut posts = store.posts.write().map_err(poisoned)?;
    let post = posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or_else(not_found)?;

    post.likes = post.likes.saturating_add(1);
    Ok(post.clone())
}

pub fn delete_post(store: &Store, post_id: u32) -> Res<Post> {
    let mut posts = store.posts.write().map_err(poisoned)?;
    let position = posts
        .iter()
        .position(|post| post.id == post_id)
        .ok_or_else(not_found)?;
    Ok(posts.remove(position))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn create_request(author_id: u32) -> PostCreateRequest {
        PostCreateRequest {
            title: "Hello".to_string(),
            content: "First post".to_string(),
            author_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unknown_author_is_rejected() {
        let store = Store::new();
        assert!(matches!(insert_post(&store, create_request(1)), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn likes_accumulate() {
        let store = Store::with_demo_data(Utc::now());
        let post = insert_post(&store, create_request(1)).unwrap();
        assert_eq!(post.likes, 0);
        like_post(&store, post.id).unwrap();
        assert_eq!(like_post(&store, post.id).unwrap().likes, 2);
    }

    #[test]
    fn author_filter() {
        let store = Store::with_demo_data(Utc::now());
        let all = get_posts(&store, None).unwrap();
        let by_first = get_posts(&store, Some(1)).unwrap();
        assert!(by_first.iter().all(|post| post.author_id == 1));
        assert!(by_first.len() < all.len());
    }

    #[test]
    fn update_and_delete_missing_post() {
        let store = Store::new();
        assert!(matches!(
            update_post(&store, 9, PostUpdateRequest::default()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(delete_post(&store, 9), Err(AppError::NotFound(_))));
        assert!(matches!(like_post(&store, 9), Err(AppError::NotFound(_))));
    }
}
