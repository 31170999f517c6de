/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - blogs: BlogRepo, id_codec: IdCodec, auth: AuthService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - 起動後は読み取り専用 (SECRET を含む AuthService も差し替えない)
 */
use std::sync::Arc;

use crate::repos::BlogRepo;
use crate::services::{auth::AuthService, id_codec::IdCodec};

#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepo>,
    pub id_codec: IdCodec,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(blogs: Arc<dyn BlogRepo>, id_codec: IdCodec, auth: Arc<AuthService>) -> Self {
        Self {
            blogs,
            id_codec,
            auth,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("blogs", &self.blogs.backend_name())
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
