/*
 * Responsibility
 * - 認証済み主体 (AuthCtx) とリソースの所有者 (user) の照合
 * - 作成時: 所有者は常に呼び出し元 (クライアント指定の user は無視)
 * - 更新/削除時: 所有者一致のみ許可、それ以外は Forbidden
 */
use crate::api::extractors::AuthCtx;
use crate::error::AppError;

/// Owner reference recorded on a newly created resource.
pub fn owner_for_create(ctx: &AuthCtx) -> &str {
    &ctx.user_id
}

/// Allow a mutation only when the caller owns the resource.
pub fn ensure_owner(ctx: &AuthCtx, owner: &str) -> Result<(), AppError> {
    if ctx.user_id == owner {
        return Ok(());
    }

    tracing::warn!(
        user_id = %ctx.user_id,
        owner = %owner,
        "mutation rejected: caller is not the owner"
    );
    Err(AppError::forbidden("only the creator can modify this blog"))
}
