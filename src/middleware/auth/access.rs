//! access token（JWT）検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>`（scheme は大文字小文字を区別しない）
//! - 署名検証 + `id` claim の存在確認は `AuthService::authenticate` 側で実施
//! - 失敗理由（ヘッダなし / 形式不正 / 署名不一致 / id なし）はログにだけ残し、
//!   クライアントには常に同じ 401 `{"error": "token missing or invalid"}` を返す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::AuthRejection;
use crate::state::AppState;

/// 保護したいルートだけに認証を掛ける。
///
/// `route_layer` なので、どのルートにもマッチしないリクエスト（404）はここを通らない。
/// ただしパスが一致してメソッドだけ違う場合（例: `PATCH /blogs`）は method router の
/// fallback ごと包まれるため、トークンなしは 401、検証済みなら 405 になる。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/blogs", post(create_blog));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let verified = match state
        .auth
        .authenticate(req.headers().get(header::AUTHORIZATION))
    {
        Ok(verified) => verified,
        Err(AuthRejection::Missing) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "bearer credential missing"
            );
            return Err(AppError::Unauthorized);
        }
        Err(AuthRejection::Invalid(err)) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                error = %err,
                "access token verification failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    let auth_ctx = AuthCtx::new(verified.user_id).with_username(verified.username);
    tracing::debug!(
        user_id = %auth_ctx.user_id,
        username = ?auth_ctx.username,
        "request authenticated"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::extractors::AuthCtxExtractor;
    use crate::test_util::{
        TEST_USER_ID, body_json, forge_token, request, sign_claims, sign_token, test_state,
    };
    use axum::{Json, http::StatusCode, routing::get};
    use serde_json::json;
    use tower::ServiceExt;

    async fn whoami(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<serde_json::Value> {
        Json(json!({ "userId": ctx.user_id }))
    }

    async fn probe_router() -> Router {
        let state = test_state().await;
        let protected = Router::new().route("/whoami", get(whoami));
        apply(protected, state.clone()).with_state(state)
    }

    async fn call(authorization: Option<&str>) -> (StatusCode, serde_json::Value) {
        let response = probe_router()
            .await
            .oneshot(request("GET", "/whoami", authorization, None))
            .await
            .expect("router should serve request");
        let status = response.status();
        (status, body_json(response).await)
    }

    fn unauthorized_body() -> serde_json::Value {
        json!({ "error": "token missing or invalid" })
    }

    #[tokio::test]
    async fn valid_token_exposes_user_id_downstream() {
        let token = sign_token(TEST_USER_ID);
        let (status, json) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "userId": "507f1f77bcf86cd799439011" }));
    }

    #[tokio::test]
    async fn scheme_keyword_is_case_insensitive() {
        let token = sign_token(TEST_USER_ID);
        for scheme in ["Bearer", "bearer", "BEARER"] {
            let (status, json) = call(Some(&format!("{scheme} {token}"))).await;
            assert_eq!(status, StatusCode::OK, "scheme {scheme}");
            assert_eq!(json["userId"], TEST_USER_ID);
        }
    }

    #[tokio::test]
    async fn same_token_is_accepted_repeatedly() {
        let router = probe_router().await;
        let header = format!("Bearer {}", sign_token(TEST_USER_ID));

        for _ in 0..3 {
            let response = router
                .clone()
                .oneshot(request("GET", "/whoami", Some(&header), None))
                .await
                .expect("router should serve request");
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let (status, json) = call(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }

    #[tokio::test]
    async fn basic_scheme_is_rejected() {
        let (status, json) = call(Some("Basic abc123")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_rejected() {
        let token = sign_claims(&json!({ "id": TEST_USER_ID }), b"not-the-test-secret");
        let (status, json) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }

    #[tokio::test]
    async fn token_without_id_claim_is_rejected() {
        let token = sign_claims(
            &json!({ "username": "@Test" }),
            crate::test_util::TEST_SECRET.as_bytes(),
        );
        let (status, json) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }

    #[tokio::test]
    async fn unsigned_token_is_rejected_uniformly() {
        let token = forge_token(
            &json!({ "alg": "none", "typ": "JWT" }),
            &json!({ "id": TEST_USER_ID, "username": "@Test" }),
            "",
        );
        let (status, json) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }

    #[tokio::test]
    async fn foreign_algorithm_is_rejected_uniformly() {
        let token = forge_token(
            &json!({ "alg": "RS256", "typ": "JWT" }),
            &json!({ "id": TEST_USER_ID }),
            "c2lnbmF0dXJl",
        );
        let (status, json) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }

    #[tokio::test]
    async fn malformed_token_is_rejected_uniformly() {
        let (status, json) = call(Some("Bearer not.a.jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, unauthorized_body());
    }
}
