/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &Config) -> Arc<AuthService> {
    let auth = AuthService::new(
        config.jwt_secret.expose().as_bytes(),
        config.token_leeway_seconds,
    );

    tracing::debug!(?auth, "access token verifier ready");

    Arc::new(auth)
}
