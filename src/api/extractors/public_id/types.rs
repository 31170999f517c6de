/**
 * Responsibility
 *
 * 主な責務
 *  - リソースごとの「意味付きID型」を宣言する
 *
 * 置くもの
 *  - BlogTag のようなタグ型
 *  - type PublicBlogId = PublicId<BlogTag> のような alias
 *
 * 置かないもの
 *  - decode ロジック
 *  - extractor 実装
 */
use super::core::PublicId;

// blogs
pub enum BlogTag {}
pub type PublicBlogId = PublicId<BlogTag>;
