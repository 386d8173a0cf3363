//! Persistence for board posts.
//!
//! The service layer only sees [`BoardPostRepository`]; the row type below is
//! the one place that knows the column layout.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, AppResult};
use crate::core::types::{BoardPost, NewBoardPost};
use crate::storage::database::Database;

#[async_trait]
pub trait BoardPostRepository: Send + Sync {
    /// Store a new post and return it with its generated id and timestamp.
    async fn insert(&self, new_post: NewBoardPost) -> AppResult<BoardPost>;

    /// Every stored post, oldest first.
    async fn select_all(&self) -> AppResult<Vec<BoardPost>>;

    async fn select_by_id(&self, id: &str) -> AppResult<Option<BoardPost>>;
}

#[derive(Debug, sqlx::FromRow)]
struct BoardPostRow {
    id: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BoardPostRow> for BoardPost {
    type Error = AppError;

    fn try_from(row: BoardPostRow) -> AppResult<Self> {
        Ok(BoardPost {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| AppError::Internal(format!("Invalid board ID: {}", e)))?,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
        })
    }
}

pub struct SqliteBoardPostRepository {
    db: Arc<Database>,
}

impl SqliteBoardPostRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BoardPostRepository for SqliteBoardPostRepository {
    async fn insert(&self, new_post: NewBoardPost) -> AppResult<BoardPost> {
        let id = Uuid::new_v4();

        let row: BoardPostRow = sqlx::query_as(
            r#"
            INSERT INTO anonymous_board (id, title, content)
            VALUES (?, ?, ?)
            RETURNING id, title, content, created_at
            "#,
        )
        .bind(id.to_string())
        .bind(&new_post.title)
        .bind(&new_post.content)
        .fetch_one(self.db.pool())
        .await?;

        row.try_into()
    }

    async fn select_all(&self) -> AppResult<Vec<BoardPost>> {
        let rows: Vec<BoardPostRow> = sqlx::query_as(
            "SELECT id, title, content, created_at FROM anonymous_board ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.into_iter().map(BoardPost::try_from).collect()
    }

    async fn select_by_id(&self, id: &str) -> AppResult<Option<BoardPost>> {
        let row: Option<BoardPostRow> = sqlx::query_as(
            "SELECT id, title, content, created_at FROM anonymous_board WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.map(BoardPost::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> (SqliteBoardPostRepository, Arc<Database>) {
        let db = Arc::new(Database::in_memory().await.unwrap());
        (SqliteBoardPostRepository::new(Arc::clone(&db)), db)
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let (repo, _db) = repository().await;
        let before = Utc::now() - chrono::Duration::seconds(1);

        let post = repo.insert(NewBoardPost::new("Hello", "World")).await.unwrap();

        assert!(!post.id.is_nil());
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.created_at >= before);
    }

    #[tokio::test]
    async fn test_select_all_empty() {
        let (repo, _db) = repository().await;
        assert!(repo.select_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_select_all_in_insertion_order() {
        let (repo, _db) = repository().await;

        let mut inserted = Vec::new();
        for i in 0..5 {
            let post = repo
                .insert(NewBoardPost::new(format!("title {}", i), "body"))
                .await
                .unwrap();
            inserted.push(post.id);
        }

        let listed: Vec<Uuid> = repo
            .select_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(listed, inserted);
    }

    #[tokio::test]
    async fn test_select_by_id() {
        let (repo, _db) = repository().await;
        let created = repo.insert(NewBoardPost::new("Hello", "World")).await.unwrap();

        let found = repo.select_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repo.select_by_id("nonexistent-id").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_check_constraints_reject_out_of_bounds() {
        let (repo, _db) = repository().await;

        assert!(repo.insert(NewBoardPost::new("", "body")).await.is_err());
        assert!(repo
            .insert(NewBoardPost::new("t".repeat(256), "body"))
            .await
            .is_err());
        assert!(repo
            .insert(NewBoardPost::new("title", "c".repeat(1001)))
            .await
            .is_err());

        assert!(repo.select_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stored_timestamp_is_utc_text() {
        let (repo, db) = repository().await;
        let post = repo.insert(NewBoardPost::new("Hello", "World")).await.unwrap();

        let (raw,): (String,) =
            sqlx::query_as("SELECT CAST(created_at AS TEXT) FROM anonymous_board WHERE id = ?")
                .bind(post.id.to_string())
                .fetch_one(db.pool())
                .await
                .unwrap();

        assert!(raw.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&raw).is_ok());
    }
}
