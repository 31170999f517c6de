//! Shared fixtures for unit and router tests.

use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    response::Response,
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use serde_json::{Value, json};

use crate::config::Config;
use crate::repos::{BlogRepo, MemoryBlogRepo, NewBlog};
use crate::services::{auth::AuthService, id_codec::IdCodec};
use crate::state::AppState;

pub const TEST_SECRET: &str = "testsecret";
pub const TEST_USER_ID: &str = "507f1f77bcf86cd799439011";
pub const OTHER_USER_ID: &str = "65a1b2c3d4e5f60718293a4b";

/// (title, author, url, likes), all owned by `TEST_USER_ID`.
pub const INITIAL_BLOGS: &[(&str, &str, &str, i64)] = &[
    (
        "React patterns",
        "Michael Chan",
        "https://reactpatterns.com/",
        7,
    ),
    (
        "Go To Statement Considered Harmful",
        "Edsger W. Dijkstra",
        "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
        5,
    ),
    (
        "Canonical string reduction",
        "Edsger W. Dijkstra",
        "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
        12,
    ),
    (
        "First class tests",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
        10,
    ),
    (
        "TDD harms architecture",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html",
        0,
    ),
    (
        "Type wars",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
        2,
    ),
];

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "SECRET" => Some(TEST_SECRET.to_string()),
        _ => None,
    })
    .expect("test config must load")
}

/// In-memory state seeded with `INITIAL_BLOGS`.
pub async fn test_state() -> AppState {
    let config = test_config();
    let blogs = MemoryBlogRepo::new();

    for (title, author, url, likes) in INITIAL_BLOGS {
        blogs
            .create(NewBlog {
                title: title.to_string(),
                author: author.to_string(),
                url: url.to_string(),
                likes: *likes,
                user_id: TEST_USER_ID.to_string(),
            })
            .await
            .expect("seed blog");
    }

    let id_codec = IdCodec::new(config.sqids_min_length, &config.sqids_alphabet)
        .expect("test id codec must build");
    let auth = AuthService::new(TEST_SECRET.as_bytes(), config.token_leeway_seconds);

    AppState::new(Arc::new(blogs), id_codec, Arc::new(auth))
}

pub fn sign_claims<T: Serialize>(claims: &T, secret: &[u8]) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("test token must sign")
}

/// Token shaped like the login flow issues: `{ username, id }`, no `exp`.
pub fn sign_token(user_id: &str) -> String {
    sign_claims(
        &json!({ "username": "@Test", "id": user_id }),
        TEST_SECRET.as_bytes(),
    )
}

/// Hand-assembled `header.claims.signature`, for tokens `jsonwebtoken` refuses to sign.
pub fn forge_token(header: &Value, claims: &Value, signature: &str) -> String {
    let segment = |value: &Value| URL_SAFE_NO_PAD.encode(value.to_string());
    format!("{}.{}.{}", segment(header), segment(claims), signature)
}

pub fn bearer(user_id: &str) -> String {
    format!("Bearer {}", sign_token(user_id))
}

pub fn request(
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request must build")
}

/// `Value::Null` for empty bodies (204 etc).
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("response body must be readable");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}
