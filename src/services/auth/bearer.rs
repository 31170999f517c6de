/*
 * Responsibility
 * - Authorization ヘッダ値から Bearer credential を取り出す
 * - scheme は大文字小文字を区別しない ("Bearer " / "bearer " / "BEARER ")
 * - 検証 (署名/claims) はしない。access_jwt 側の責務
 */
use axum::http::HeaderValue;

const SCHEME_PREFIX: &str = "bearer ";

/// Returns the raw credential following `Bearer `, or `None` when the header is absent,
/// not visible ASCII, or uses another scheme.
///
/// The token is returned verbatim (no trimming). Validation decides whether it is usable.
pub fn extract(header: Option<&HeaderValue>) -> Option<&str> {
    let value = header?.to_str().ok()?;
    strip_scheme(value)
}

pub fn strip_scheme(value: &str) -> Option<&str> {
    // `get` returns None when the 7th byte is not on a char boundary
    let prefix = value.get(..SCHEME_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SCHEME_PREFIX) {
        return None;
    }
    Some(&value[SCHEME_PREFIX.len()..])
}
