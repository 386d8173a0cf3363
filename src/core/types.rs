use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 255;

/// Maximum content length in characters.
pub const CONTENT_MAX_LEN: usize = 1000;

/// A single anonymous post, as seen by the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to insert a post. `id` and `created_at` are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewBoardPost {
    pub title: String,
    pub content: String,
}

impl NewBoardPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBoardPostRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 1000, message = "content must be 1-1000 characters"))]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<BoardPost> for BoardPostResponse {
    fn from(post: BoardPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
