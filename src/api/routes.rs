/*
 * Responsibility
 * - /api 以下の URL 構造を定義
 * - 参照系 (GET) は公開、変更系 (POST/PUT/DELETE) だけに Bearer 認証を route_layer で掛ける
 */
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::auth::access;
use crate::state::AppState;

use crate::api::handlers::{
    blogs::{create_blog, delete_blog, get_blog, list_blogs, update_blog},
    health::health,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/blogs", get(list_blogs))
        .route("/blogs/{id}", get(get_blog));

    let protected = Router::new()
        .route("/blogs", post(create_blog))
        .route("/blogs/{id}", put(update_blog).delete(delete_blog));

    public.merge(access::apply(protected, state))
}
