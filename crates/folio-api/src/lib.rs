//! JSON API for the Folio contact form.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::SubmissionStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone(), ApiOptions::default()))
//! ```

pub mod contact;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::post};
use folio_core::store::SubmissionStore;

pub use error::ApiError;

/// Behaviour switches for the API.
#[derive(Debug, Clone, Copy)]
pub struct ApiOptions {
  /// When `false`, `POST /contact` answers 501 and writes nothing. Used by
  /// deployments that serve the site statically.
  pub accept_submissions: bool,
}

impl Default for ApiOptions {
  fn default() -> Self { Self { accept_submissions: true } }
}

/// Shared state threaded through the API handlers.
pub struct ApiState<S> {
  pub store:              Arc<S>,
  pub accept_submissions: bool,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:              Arc::clone(&self.store),
      accept_submissions: self.accept_submissions,
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, options: ApiOptions) -> Router<()>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/contact", post(contact::submit::<S>))
    .with_state(ApiState {
      store,
      accept_submissions: options.accept_submissions,
    })
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use folio_core::submission::{
    ContactSubmission, FormType, NewSubmission, SubmissionStatus,
  };
  use folio_store_sqlite::SqliteStore;
  use serde_json::Value;
  use tower::ServiceExt as _;
  use uuid::Uuid;

  /// A store whose every write fails, standing in for an unreachable database.
  #[derive(Clone)]
  struct FailingStore;

  impl SubmissionStore for FailingStore {
    type Error = std::io::Error;

    async fn record_submission(
      &self,
      _input: NewSubmission,
    ) -> Result<ContactSubmission, Self::Error> {
      Err(std::io::Error::other("database is locked"))
    }

    async fn get_submission(
      &self,
      _id: Uuid,
    ) -> Result<Option<ContactSubmission>, Self::Error> {
      Ok(None)
    }

    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, Self::Error> {
      Ok(Vec::new())
    }
  }

  async fn sqlite() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn post_contact<S>(
    store: Arc<S>,
    options: ApiOptions,
    body: &str,
  ) -> (StatusCode, Value)
  where
    S: SubmissionStore + Clone + Send + Sync + 'static,
    S::Error: std::error::Error + Send + Sync + 'static,
  {
    let req = Request::builder()
      .method("POST")
      .uri("/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    let resp = api_router(store, options).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  const VALID: &str =
    r#"{"name":"A","email":"a@b.com","subject":"Hi","message":"Hello"}"#;

  // ── Accepted ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn valid_submission_is_stored() {
    let store = sqlite().await;
    let (status, body) = post_contact(store.clone(), ApiOptions::default(), VALID).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact form submitted successfully");
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    let all = store.list_submissions().await.unwrap();
    assert_eq!(all.len(), 1);
    let record = &all[0];
    assert_eq!(record.id, id);
    assert_eq!(record.name, "A");
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.subject, "Hi");
    assert_eq!(record.message, "Hello");
    assert_eq!(record.status, SubmissionStatus::New);
    assert_eq!(record.form_type, FormType::Contact);
  }

  #[tokio::test]
  async fn client_cannot_choose_status_or_form_type() {
    let store = sqlite().await;
    let body = r#"{"name":"A","email":"a@b.com","subject":"Hi","message":"Hello",
                   "status":"archived","formType":"spam","form_type":"spam"}"#;
    let (status, _) = post_contact(store.clone(), ApiOptions::default(), body).await;
    assert_eq!(status, StatusCode::OK);

    let record = &store.list_submissions().await.unwrap()[0];
    assert_eq!(record.status, SubmissionStatus::New);
    assert_eq!(record.form_type, FormType::Contact);
  }

  #[tokio::test]
  async fn two_submissions_get_distinct_ids() {
    let store = sqlite().await;
    let (_, first) = post_contact(store.clone(), ApiOptions::default(), VALID).await;
    let (_, second) = post_contact(store.clone(), ApiOptions::default(), VALID).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.list_submissions().await.unwrap().len(), 2);
  }

  // ── Rejected ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn any_empty_field_is_rejected_without_writing() {
    for field in ["name", "email", "subject", "message"] {
      let store = sqlite().await;
      let mut body: Value = serde_json::from_str(VALID).unwrap();
      body[field] = Value::String(String::new());

      let (status, resp) =
        post_contact(store.clone(), ApiOptions::default(), &body.to_string()).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
      assert_eq!(resp["error"], "All fields are required");
      assert!(store.list_submissions().await.unwrap().is_empty());
    }
  }

  #[tokio::test]
  async fn absent_and_null_fields_are_rejected() {
    let store = sqlite().await;
    for body in [
      r#"{"email":"a@b.com","subject":"Hi","message":"Hello"}"#,
      r#"{"name":null,"email":"a@b.com","subject":"Hi","message":"Hello"}"#,
      r#"{"name":false,"email":"a@b.com","subject":"Hi","message":"Hello"}"#,
      r#"{"name":"A","email":0,"subject":"Hi","message":"Hello"}"#,
      "{}",
    ] {
      let (status, resp) = post_contact(store.clone(), ApiOptions::default(), body).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
      assert_eq!(resp["error"], "All fields are required");
    }
    assert!(store.list_submissions().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn malformed_json_is_a_client_error() {
    let store = sqlite().await;
    let (status, resp) =
      post_contact(store.clone(), ApiOptions::default(), "{not json").await;
    assert!(status.is_client_error(), "{status}");
    assert!(resp["error"].is_string());
    assert!(store.list_submissions().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn non_text_field_is_a_client_error() {
    let store = sqlite().await;
    let body = r#"{"name":["A"],"email":"a@b.com","subject":"Hi","message":"Hello"}"#;
    let (status, resp) = post_contact(store.clone(), ApiOptions::default(), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["error"].is_string());
    assert!(store.list_submissions().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn missing_content_type_is_rejected() {
    let store = sqlite().await;
    let req = Request::builder()
      .method("POST")
      .uri("/contact")
      .body(Body::from(VALID))
      .unwrap();
    let resp = api_router(store.clone(), ApiOptions::default())
      .oneshot(req)
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(store.list_submissions().await.unwrap().is_empty());
  }

  // ── Store failure ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn store_failure_is_a_generic_server_error() {
    let store = Arc::new(FailingStore);
    let (status, body) = post_contact(store.clone(), ApiOptions::default(), VALID).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(!body.to_string().contains("locked"), "cause leaked: {body}");
  }

  #[tokio::test]
  async fn database_failure_leaves_no_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.sqlite");
    let store = Arc::new(SqliteStore::open(&path).await.unwrap());

    // Hide the table from the store for the duration of the request.
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw
      .execute_batch("ALTER TABLE contact_submissions RENAME TO held")
      .unwrap();

    let (status, body) = post_contact(store.clone(), ApiOptions::default(), VALID).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(!body.to_string().contains("no such table"), "cause leaked: {body}");

    raw
      .execute_batch("ALTER TABLE held RENAME TO contact_submissions")
      .unwrap();
    assert!(store.list_submissions().await.unwrap().is_empty());
  }

  // ── Disabled ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn disabled_api_answers_501_and_writes_nothing() {
    let store = sqlite().await;
    let options = ApiOptions { accept_submissions: false };
    let (status, body) = post_contact(store.clone(), options, VALID).await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["message"], error::DISABLED_MESSAGE);
    assert!(store.list_submissions().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn get_is_method_not_allowed() {
    let store = sqlite().await;
    let req = Request::builder()
      .method("GET")
      .uri("/contact")
      .body(Body::empty())
      .unwrap();
    let resp = api_router(store, ApiOptions::default()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
  }
}
