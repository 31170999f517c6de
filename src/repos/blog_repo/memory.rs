//! In-memory `BlogRepo`.
//!
//! Used when `DATABASE_URL` is not configured and by tests.
//! Ids are assigned from a counter starting at 1 and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{BlogChanges, BlogRepo, BlogRow, NewBlog};
use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Default)]
pub struct MemoryBlogRepo {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, BlogRow>,
}

impl MemoryBlogRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepo for MemoryBlogRepo {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> RepoResult<Vec<BlogRow>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get(&self, blog_id: i64) -> RepoResult<Option<BlogRow>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&blog_id).cloned())
    }

    async fn create(&self, blog: NewBlog) -> RepoResult<BlogRow> {
        let mut inner = self.inner.write().await;
        let blog_id = inner.last_id.checked_add(1).ok_or(RepoError::IdExhausted)?;
        let now = Utc::now();

        let row = BlogRow {
            blog_id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user_id: blog.user_id,
            created_at: now,
            updated_at: now,
        };

        inner.last_id = blog_id;
        inner.rows.insert(blog_id, row.clone());
        Ok(row)
    }

    async fn update(&self, blog_id: i64, changes: BlogChanges) -> RepoResult<Option<BlogRow>> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&blog_id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(author) = changes.author {
            row.author = author;
        }
        if let Some(url) = changes.url {
            row.url = url;
        }
        if let Some(likes) = changes.likes {
            row.likes = likes;
        }
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, blog_id: i64) -> RepoResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&blog_id).is_some())
    }
}
