//! Handler for `/contact`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: [`ContactBody`]; returns 200 + [`SubmitResponse`] |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_core::{store::SubmissionStore, submission::ContactForm};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

/// JSON body accepted by `POST /contact`.
///
/// Every field is optional at the wire level so that an absent key, `null`,
/// `false`, `0` and `""` are all reported the same way, as a missing field.
/// Any other non-string value is a malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct ContactBody {
  #[serde(default, deserialize_with = "text_or_blank")]
  pub name:    Option<String>,
  #[serde(default, deserialize_with = "text_or_blank")]
  pub email:   Option<String>,
  #[serde(default, deserialize_with = "text_or_blank")]
  pub subject: Option<String>,
  #[serde(default, deserialize_with = "text_or_blank")]
  pub message: Option<String>,
}

fn text_or_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(Some(s)),
    Value::Null | Value::Bool(false) => Ok(None),
    Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
    other => Err(de::Error::custom(format!("expected a string, found {other}"))),
  }
}

impl From<ContactBody> for ContactForm {
  fn from(b: ContactBody) -> Self {
    ContactForm {
      name:    b.name.unwrap_or_default(),
      email:   b.email.unwrap_or_default(),
      subject: b.subject.unwrap_or_default(),
      message: b.message.unwrap_or_default(),
    }
  }
}

/// Success body of `POST /contact`.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
  pub success: bool,
  pub message: String,
  pub id:      Uuid,
}

/// `POST /contact` — validate, store one submission, return its id.
pub async fn submit<S>(
  State(state): State<ApiState<S>>,
  body: Result<Json<ContactBody>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if !state.accept_submissions {
    return Err(ApiError::Disabled);
  }

  let Json(body) = body.inspect_err(|e| {
    tracing::warn!(error = %e, "rejected unreadable contact body");
  })?;

  let new = ContactForm::from(body).validate().inspect_err(|e| {
    let missing: Vec<_> = e.missing().iter().map(|f| f.as_str()).collect();
    tracing::warn!(?missing, "rejected incomplete contact submission");
  })?;

  let submission = state.store.record_submission(new).await.map_err(|e| {
    tracing::error!(error = %e, "failed to record contact submission");
    ApiError::Store(Box::new(e))
  })?;

  tracing::info!(id = %submission.id, "recorded contact submission");
  Ok(Json(SubmitResponse {
    success: true,
    message: "Contact form submitted successfully".to_owned(),
    id:      submission.id,
  }))
}
