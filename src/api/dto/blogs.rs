/*
 * Responsibility
 * - Blogs の request/response DTO
 * - 公開 ID は encode 済みの値を返す (内部 ID を漏らさない)
 * - user (所有者) はリクエストから受け取らない (AuthCtx から決まる)
 */
use serde::{Deserialize, Serialize};
use url::Url;

use crate::repos::{BlogChanges, NewBlog};

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl CreateBlogRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if is_blank(self.title.as_deref()) {
            return Err("title is required");
        }
        if is_blank(self.author.as_deref()) {
            return Err("author is required");
        }
        match self.url.as_deref() {
            None => return Err("url is required"),
            Some(url) if url.trim().is_empty() => return Err("url is required"),
            Some(url) => validate_url(url)?,
        }
        if let Some(likes) = self.likes
            && likes < 0
        {
            return Err("likes must be >= 0");
        }

        Ok(())
    }

    /// Call after `validate()`. The owner comes from the authenticated caller.
    pub fn into_new_blog(self, user_id: &str) -> NewBlog {
        NewBlog {
            title: self.title.unwrap_or_default().trim().to_string(),
            author: self.author.unwrap_or_default().trim().to_string(),
            url: self.url.unwrap_or_default().trim().to_string(),
            likes: self.likes.unwrap_or(0),
            user_id: user_id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl UpdateBlogRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("title cannot be empty");
        }
        if let Some(author) = &self.author
            && author.trim().is_empty()
        {
            return Err("author cannot be empty");
        }
        if let Some(url) = &self.url {
            validate_url(url)?;
        }
        if let Some(likes) = self.likes
            && likes < 0
        {
            return Err("likes must be >= 0");
        }
        Ok(())
    }

    pub fn into_changes(self) -> BlogChanges {
        BlogChanges {
            title: self.title.map(|s| s.trim().to_string()),
            author: self.author.map(|s| s.trim().to_string()),
            url: self.url.map(|s| s.trim().to_string()),
            likes: self.likes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: String, // encoded
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: String, // owner subject id
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

fn validate_url(raw: &str) -> Result<(), &'static str> {
    let url = Url::parse(raw.trim()).map_err(|_| "url must be an absolute URL")?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("url must use http or https");
    }
    Ok(())
}
