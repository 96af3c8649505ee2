//! HTTP layer for the Clinica booking backend.
//!
//! Exposes an axum [`Router`] backed by any [`ClinicStore`]. Callers are
//! authenticated with bearer access tokens; booking commands are forwarded to
//! the [`Ledger`].

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use clinica_core::{ledger::Ledger, store::ClinicStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{centers, dates, users};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CLINICA_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  #[serde(default = "default_store_path")]
  pub store_path:     PathBuf,
  /// HS256 signing secret. Required to serve; may be empty for `--migrate`.
  #[serde(default)]
  pub jwt_secret:     String,
  #[serde(default = "default_token_ttl")]
  pub token_ttl_secs: u64,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 5000 }

fn default_store_path() -> PathBuf { PathBuf::from("clinica.db") }

fn default_token_ttl() -> u64 { 3600 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ClinicStore> {
  pub store:  Arc<S>,
  pub ledger: Ledger<S>,
  pub config: Arc<ServerConfig>,
}

impl<S: ClinicStore> AppState<S> {
  pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
    Self {
      ledger: Ledger::new(Arc::clone(&store)),
      store,
      config: Arc::new(config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",               get(users::root))
    .route("/register",       post(users::register::<S>))
    .route("/login",          post(users::login::<S>))
    .route("/profile",        get(users::profile::<S>))
    .route("/centers",        get(centers::list::<S>))
    .route("/date/create",    post(dates::create::<S>))
    .route("/date/getByUser", get(dates::by_user::<S>))
    .route("/date/delete",    post(dates::delete::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
