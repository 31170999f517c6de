/*
 * Responsibility
 * - /blogs 系 CRUD handler
 * - Path の {id} は公開 ID → extractor で復号化して内部 ID に変換して受け取る
 * - 変更系は AuthCtxExtractor (middleware が検証済み) を受け取り、所有者チェックしてから repo を呼ぶ
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::blogs::{BlogResponse, CreateBlogRequest, UpdateBlogRequest},
        extractors::{AuthCtxExtractor, public_id::PublicBlogId},
    },
    error::AppError,
    repos::BlogRow,
    services::ownership,
    state::AppState,
};

fn row_to_response(state: &AppState, row: BlogRow) -> Result<BlogResponse, AppError> {
    let public_id = state.id_codec.encode(row.blog_id)?;

    Ok(BlogResponse {
        id: public_id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user: row.user_id,
    })
}

async fn find_blog(state: &AppState, blog_id: i64) -> Result<BlogRow, AppError> {
    state
        .blogs
        .get(blog_id)
        .await?
        .ok_or(AppError::not_found("blog"))
}

pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let rows = state.blogs.list().await?;

    let mut res = Vec::with_capacity(rows.len());
    for row in rows {
        res.push(row_to_response(&state, row)?);
    }

    Ok(Json(res))
}

pub async fn get_blog(
    State(state): State<AppState>,
    blog_id: PublicBlogId,
) -> Result<Json<BlogResponse>, AppError> {
    let row = find_blog(&state, blog_id.id).await?;
    Ok(Json(row_to_response(&state, row)?))
}

pub async fn create_blog(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let new_blog = req.into_new_blog(ownership::owner_for_create(&ctx));
    let row = state.blogs.create(new_blog).await?;

    tracing::info!(blog_id = row.blog_id, user_id = %ctx.user_id, "blog created");

    let res = row_to_response(&state, row)?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_blog(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    blog_id: PublicBlogId,
    Json(req): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    let current = find_blog(&state, blog_id.id).await?;
    ownership::ensure_owner(&ctx, &current.user_id)?;

    req.validate().map_err(AppError::bad_request)?;

    let row = state
        .blogs
        .update(blog_id.id, req.into_changes())
        .await?
        .ok_or(AppError::not_found("blog"))?;

    Ok(Json(row_to_response(&state, row)?))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    blog_id: PublicBlogId,
) -> Result<StatusCode, AppError> {
    let current = find_blog(&state, blog_id.id).await?;
    ownership::ensure_owner(&ctx, &current.user_id)?;

    if state.blogs.delete(blog_id.id).await? {
        tracing::info!(blog_id = blog_id.id, user_id = %ctx.user_id, "blog deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("blog"))
    }
}
