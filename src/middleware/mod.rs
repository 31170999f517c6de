/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: Bearer 検証 (保護ルートのみ) / cors / http: request-id, trace, limit, timeout
 */
pub mod auth;
pub mod cors;
pub mod http;
