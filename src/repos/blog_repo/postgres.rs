/*
 * Responsibility
 * - blogs CRUD (Postgres / sqlx)
 * - schema は migrations/ (起動時に MIGRATOR で適用)
 */
use async_trait::async_trait;
use sqlx::{PgPool, migrate::Migrator};

use super::{BlogChanges, BlogRepo, BlogRow, NewBlog};
use crate::repos::error::RepoResult;

/// Embedded `migrations/`; applied once at startup before the repo is used.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone, Debug)]
pub struct PgBlogRepo {
    pool: PgPool,
}

impl PgBlogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepo for PgBlogRepo {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> RepoResult<Vec<BlogRow>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                "blogId", title, author, url, likes, "userId", "createdAt", "updatedAt"
            FROM blogs
            ORDER BY "blogId" ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, blog_id: i64) -> RepoResult<Option<BlogRow>> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                "blogId", title, author, url, likes, "userId", "createdAt", "updatedAt"
            FROM blogs
            WHERE "blogId" = $1
            "#,
        )
        .bind(blog_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, blog: NewBlog) -> RepoResult<BlogRow> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blogs (title, author, url, likes, "userId")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                "blogId", title, author, url, likes, "userId", "createdAt", "updatedAt"
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.url)
        .bind(blog.likes)
        .bind(&blog.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, blog_id: i64, changes: BlogChanges) -> RepoResult<Option<BlogRow>> {
        // owner ("userId") is never updated
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs
            SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                url = COALESCE($4, url),
                likes = COALESCE($5, likes),
                "updatedAt" = now()
            WHERE "blogId" = $1
            RETURNING
                "blogId", title, author, url, likes, "userId", "createdAt", "updatedAt"
            "#,
        )
        .bind(blog_id)
        .bind(changes.title)
        .bind(changes.author)
        .bind(changes.url)
        .bind(changes.likes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, blog_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM blogs
            WHERE "blogId" = $1
            "#,
        )
        .bind(blog_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blogs_schema_is_embedded() {
        let sql: Vec<&str> = MIGRATOR.iter().map(|m| m.sql.as_ref()).collect();

        assert!(!sql.is_empty());
        assert!(sql.iter().any(|s| s.contains("CREATE TABLE IF NOT EXISTS blogs")));
        assert!(sql.iter().any(|s| s.contains("\"userId\"")));
    }
}
