/*
 * Responsibility
 * - handler 向け extractor の公開窓口
 * - auth_ctx: 認証済み主体 / public_id: 公開 ID → 内部 ID
 */
pub mod auth_ctx;
pub mod public_id;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
