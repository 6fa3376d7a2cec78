//! HTTP server wiring for the Folio contact API.
//!
//! Holds the runtime configuration and assembles the top-level [`Router`]:
//! the JSON API nested under `/api`, wrapped in request tracing.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use folio_api::{ApiOptions, api_router};
use folio_core::store::SubmissionStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLIO_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:               String,
  #[serde(default = "default_port")]
  pub port:               u16,
  #[serde(default = "default_store_path")]
  pub store_path:         PathBuf,
  /// Set to `false` for static deployments; the endpoint then answers 501.
  #[serde(default = "default_accept_submissions")]
  pub accept_submissions: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3000 }

fn default_store_path() -> PathBuf { PathBuf::from("folio.sqlite") }

fn default_accept_submissions() -> bool { true }

impl ServerConfig {
  /// `host:port` suitable for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn api_options(&self) -> ApiOptions {
    ApiOptions { accept_submissions: self.accept_submissions }
  }
}

/// Layer the optional TOML file at `path` with `FOLIO_*` environment
/// variables and deserialise the result.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FOLIO"))
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level axum [`Router`] for the server.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .nest("/api", api_router(store, config.api_options()))
    .layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Integration tests ────────────────────────────────────────────────────────
