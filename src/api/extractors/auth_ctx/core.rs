use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::AuthCtx;

/// Handler で AuthCtx を受け取るための extractor
/// middleware が AuthCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（middleware 未設定のルートでも identity を仮定しない）
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn missing_context_is_unauthorized() {
        let (mut parts, ()) = Request::new(()).into_parts();
        let result = AuthCtxExtractor::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn context_from_extensions_is_returned() {
        let mut req = Request::new(());
        req.extensions_mut()
            .insert(AuthCtx::new("507f1f77bcf86cd799439011".to_string()));
        let (mut parts, ()) = req.into_parts();

        let AuthCtxExtractor(ctx) = AuthCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .expect("context must be extracted");
        assert_eq!(ctx.user_id, "507f1f77bcf86cd799439011");
    }
}
