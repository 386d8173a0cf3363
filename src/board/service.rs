use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::error::{AppError, AppResult};
use crate::core::types::{BoardPost, NewBoardPost};
use crate::storage::repositories::BoardPostRepository;

/// Operations the HTTP layer needs from the board.
#[async_trait]
pub trait BoardService: Send + Sync {
    async fn create(&self, title: String, content: String) -> AppResult<BoardPost>;

    async fn list(&self) -> AppResult<Vec<BoardPost>>;

    /// Fails with [`AppError::NotFound`] when no post has this id.
    async fn read(&self, id: &str) -> AppResult<BoardPost>;
}

pub struct AnonymousBoardService {
    repository: Arc<dyn BoardPostRepository>,
}

impl AnonymousBoardService {
    pub fn new(repository: Arc<dyn BoardPostRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BoardService for AnonymousBoardService {
    /// Create a new post
    async fn create(&self, title: String, content: String) -> AppResult<BoardPost> {
        let post = self
            .repository
            .insert(NewBoardPost::new(title, content))
            .await?;

        info!(post_id = %post.id, "Created board post");
        Ok(post)
    }

    /// Get all posts, oldest first
    async fn list(&self) -> AppResult<Vec<BoardPost>> {
        let posts = self.repository.select_all().await?;
        debug!(count = posts.len(), "Listed board posts");
        Ok(posts)
    }

    /// Get a post by id
    async fn read(&self, id: &str) -> AppResult<BoardPost> {
        self.repository
            .select_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))
    }
}
