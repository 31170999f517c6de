/*
 * Responsibility
 * - 永続化層の公開インターフェース
 * - handler は BlogRepo trait だけを見る (Postgres / in-memory は起動時に選択)
 */
pub mod blog_repo;
pub mod error;

pub use blog_repo::{
    BlogChanges, BlogRepo, BlogRow, MIGRATOR, MemoryBlogRepo, NewBlog, PgBlogRepo,
};
