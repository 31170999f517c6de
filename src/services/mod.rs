/*
 * Responsibility
 * - handler から使うドメインサービス群
 * - auth: Bearer 検証 / id_codec: 公開 ID / ownership: 所有者チェック
 */
pub mod auth;
pub mod id_codec;
pub mod ownership;
