/*
 * Responsibility
 * - blogs の永続化インターフェース (BlogRepo)
 * - 行の型 (BlogRow) と入力の型 (NewBlog / BlogChanges)
 * - 実装: postgres (sqlx) / memory (DATABASE_URL 未設定時・テスト)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repos::error::RepoResult;

mod memory;
mod postgres;

pub use memory::MemoryBlogRepo;
pub use postgres::{MIGRATOR, PgBlogRepo};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BlogRow {
    #[sqlx(rename = "blogId")]
    pub blog_id: i64,

    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,

    // owner (subject id of the creator), never updated
    #[sqlx(rename = "userId")]
    pub user_id: String,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: String,
}

/// Partial update. `None` leaves the column untouched. The owner is not part of it.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

#[async_trait]
pub trait BlogRepo: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn list(&self) -> RepoResult<Vec<BlogRow>>;

    async fn get(&self, blog_id: i64) -> RepoResult<Option<BlogRow>>;

    async fn create(&self, blog: NewBlog) -> RepoResult<BlogRow>;

    // `Ok(None)` when no blog has this id.
    async fn update(&self, blog_id: i64, changes: BlogChanges) -> RepoResult<Option<BlogRow>>;

    // `Ok(false)` when no blog has this id.
    async fn delete(&self, blog_id: i64) -> RepoResult<bool>;
}
