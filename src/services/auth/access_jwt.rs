use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Deserializer};
use std::{error::Error as StdError, fmt};

use axum::http::HeaderValue;

use crate::services::auth::bearer;

// Errors returned by access-token verification + claim checks.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    MissingSubject,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::MissingSubject => write!(f, "missing or empty 'id' claim"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            Self::MissingSubject => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Why the gate refused a request.
///
/// Both variants are reported to clients as the same 401; the split only exists for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum AuthRejection {
    #[error("bearer credential missing")]
    Missing,
    #[error("bearer credential invalid: {0}")]
    Invalid(#[from] AccessJwtError),
}

/// Access token (JWT) claims.
///
/// Tokens are signed with `{ username, id }` by the login flow (not part of this service),
/// usually without `exp`. `exp` / `nbf` are checked by `Validation` when present.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(default, deserialize_with = "subject_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

// `id` may be a string or a number; numeric 0 counts as absent.
fn subject_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(id)) => Some(id),
        Some(Raw::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(Raw::Number(_)) | None => None,
    })
}

/// AuthService が返す「検証済み・アプリ側で使う型」
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccessToken {
    pub user_id: String,
    pub username: Option<String>,
}

/// HMAC (HS256/384/512) access-token verifier.
///
/// - The secret is injected at construction and never printed via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // tokens from the login flow carry no `exp`; only check it when present
        validation.required_spec_claims.clear();
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    // Verify the signature and decode the claim set.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + require a non-empty subject (`id`), then convert into the application type.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.verify(token)?;

        let user_id = claims
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(AccessJwtError::MissingSubject)?;

        Ok(VerifiedAccessToken {
            user_id,
            username: claims.username,
        })
    }

    /// The whole gate: header → bearer credential → verified identity.
    ///
    /// Entry point for the access middleware.
    pub fn authenticate(
        &self,
        authorization: Option<&HeaderValue>,
    ) -> Result<VerifiedAccessToken, AuthRejection> {
        let token = bearer::extract(authorization).ok_or(AuthRejection::Missing)?;
        Ok(self.verify_verified(token)?)
    }
}
