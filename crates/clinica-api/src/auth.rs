//! Password hashing, access tokens, and the bearer-token extractor.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use chrono::Utc;
use clinica_core::store::ClinicStore;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::{AppState, ServerConfig, error::ApiError};

// ─── Passwords ────────────────────────────────────────────────────────────────

/// Hash `password` into an argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|h| h.to_string())
    .map_err(|e| ApiError::Internal(format!("argon2 error: {e}")))
}

/// `false` for a wrong password and for an unparseable stored hash alike.
pub fn verify_password(password: &str, phc: &str) -> bool {
  PasswordHash::new(phc)
    .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
    .is_ok()
}

// ─── Tokens ───────────────────────────────────────────────────────────────────

/// JWT claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  /// The username.
  pub sub: String,
  pub iat: i64,
  pub exp: i64,
}

/// Issue an HS256 access token for `username`.
pub fn issue_token(config: &ServerConfig, username: &str) -> Result<String, ApiError> {
  let now = Utc::now().timestamp();
  let exp = i64::try_from(config.token_ttl_secs)
    .ok()
    .and_then(|ttl| now.checked_add(ttl))
    .ok_or_else(|| {
      ApiError::Internal(format!("token_ttl_secs {} is out of range", config.token_ttl_secs))
    })?;
  let claims = Claims {
    sub: username.to_owned(),
    iat: now,
    exp,
  };
  jsonwebtoken::encode(
    &Header::default(),
    &claims,
    &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
  )
  .map_err(|e| ApiError::Internal(format!("jwt error: {e}")))
}

/// Validate signature and expiry of `token`.
pub fn verify_token(config: &ServerConfig, token: &str) -> Result<Claims, ApiError> {
  jsonwebtoken::decode::<Claims>(
    token,
    &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
    &Validation::default(),
  )
  .map(|data| data.claims)
  .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_owned()))
}

fn bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
  let value = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| ApiError::Unauthorized("Missing Authorization Header".to_owned()))?;

  value
    .strip_prefix("Bearer ")
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .ok_or_else(|| ApiError::Unauthorized("Authorization header must be 'Bearer <token>'".to_owned()))
}

// ─── Extractor ────────────────────────────────────────────────────────────────

/// The authenticated caller's username.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

impl<S> FromRequestParts<AppState<S>> for AuthUser
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer(&parts.headers)?;
    let claims = verify_token(&state.config, token)?;
    Ok(AuthUser(claims.sub))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{path::PathBuf, sync::Arc};

  use axum::{body::Body, http::Request};
  use clinica_store_sqlite::SqliteStore;

  fn config() -> ServerConfig {
    ServerConfig {
      host:           "127.0.0.1".to_string(),
      port:           5000,
      store_path:     PathBuf::from(":memory:"),
      jwt_secret:     "test-secret-key-12345".to_string(),
      token_ttl_secs: 3600,
    }
  }

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState::new(Arc::new(store), config())
  }

  async fn extract(req: Request<Body>, state: &AppState<SqliteStore>) -> Result<AuthUser, ApiError> {
    let (mut parts, _) = req.into_parts();
    AuthUser::from_request_parts(&mut parts, state).await
  }

  #[test]
  fn password_hash_verifies() {
    let hash = hash_password("password123").unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("password123", &hash));
    assert!(!verify_password("password124", &hash));
    assert!(!verify_password("password123", "not-a-phc-string"));
  }

  #[test]
  fn token_round_trip() {
    let cfg = config();
    let token = issue_token(&cfg, "ana").unwrap();
    let claims = verify_token(&cfg, &token).unwrap();
    assert_eq!(claims.sub, "ana");
    assert_eq!(claims.exp - claims.iat, 3600);
  }

  #[test]
  fn oversized_token_ttl_is_an_error() {
    let mut cfg = config();
    cfg.token_ttl_secs = u64::MAX;
    assert!(matches!(issue_token(&cfg, "ana"), Err(ApiError::Internal(_))));

    cfg.token_ttl_secs = i64::MAX as u64;
    assert!(matches!(issue_token(&cfg, "ana"), Err(ApiError::Internal(_))));
  }

  #[test]
  fn token_from_other_secret_is_rejected() {
    let mut other = config();
    other.jwt_secret = "another-secret".into();
    let token = issue_token(&other, "ana").unwrap();
    assert!(matches!(verify_token(&config(), &token), Err(ApiError::Unauthorized(_))));
  }

  #[test]
  fn expired_token_is_rejected() {
    let cfg = config();
    let now = Utc::now().timestamp();
    let claims = Claims { sub: "ana".into(), iat: now - 7200, exp: now - 3600 };
    let token = jsonwebtoken::encode(
      &Header::default(),
      &claims,
      &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .unwrap();
    assert!(matches!(verify_token(&cfg, &token), Err(ApiError::Unauthorized(_))));
  }

  #[tokio::test]
  async fn valid_bearer_yields_username() {
    let state = make_state().await;
    let token = issue_token(&state.config, "ana").unwrap();
    let req = Request::builder()
      .header(header::AUTHORIZATION, format!("Bearer {token}"))
      .body(Body::empty()).unwrap();
    let AuthUser(name) = extract(req, &state).await.unwrap();
    assert_eq!(name, "ana");
  }

  #[tokio::test]
  async fn missing_header() {
    let state = make_state().await;
    let req = Request::builder().body(Body::empty()).unwrap();
    assert!(matches!(extract(req, &state).await, Err(ApiError::Unauthorized(_))));
  }

  #[tokio::test]
  async fn basic_scheme_is_rejected() {
    let state = make_state().await;
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Basic YW5hOnNlY3JldA==")
      .body(Body::empty()).unwrap();
    assert!(matches!(extract(req, &state).await, Err(ApiError::Unauthorized(_))));
  }

  #[tokio::test]
  async fn garbage_token_is_rejected() {
    let state = make_state().await;
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Bearer not.a.jwt")
      .body(Body::empty()).unwrap();
    assert!(matches!(extract(req, &state).await, Err(ApiError::Unauthorized(_))));
  }
}
