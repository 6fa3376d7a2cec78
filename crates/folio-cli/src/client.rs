//! Async HTTP client wrapping the Folio JSON API.

use anyhow::{Context, Result, anyhow};
use folio_core::submission::ContactForm;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

/// Connection settings for the Folio API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// The service's acknowledgement of an accepted submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
  pub success: bool,
  pub id:      Uuid,
  #[serde(default)]
  pub message: String,
}

/// Error bodies use `error`, except the 501 of a disabled endpoint which
/// uses `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  error:   Option<String>,
  message: Option<String>,
}

/// Async HTTP client for the Folio JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `POST /api/contact`
  ///
  /// Any non-2xx answer, or a 2xx without `success: true`, is an error.
  pub async fn submit_contact(&self, form: &ContactForm) -> Result<Receipt> {
    let resp = self
      .client
      .post(self.url("/contact"))
      .json(form)
      .send()
      .await
      .context("POST /contact failed")?;

    let status = resp.status();
    if !status.is_success() {
      let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error.or(b.message));
      return Err(match detail {
        Some(d) => anyhow!("POST /contact → {status}: {d}"),
        None => anyhow!("POST /contact → {status}"),
      });
    }

    let receipt: Receipt = resp.json().await.context("deserialising receipt")?;
    if !receipt.success {
      return Err(anyhow!("POST /contact → {status} without success flag"));
    }
    Ok(receipt)
  }
}
