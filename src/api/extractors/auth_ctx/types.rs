/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - 単一ロールなので scopes / roles は持たない
 */

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` はトークンの `id` claim (所有者キーとして blogs.user と照合する)
/// - `username` はログ相関用 (必須ではない)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: String,
    pub username: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            username: None,
        }
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }
}
