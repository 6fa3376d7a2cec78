//! The `SubmissionStore` trait.
//!
//! Implemented by storage backends (e.g. `folio-store-sqlite`). The API layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::submission::{ContactSubmission, NewSubmission};

/// Abstraction over a contact submission store.
///
/// Submissions are append-only: there is no update or delete.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a validated submission in a single insert.
  ///
  /// The store assigns the identifier and `created_at`.
  fn record_submission(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<ContactSubmission, Self::Error>> + Send + '_;

  /// Retrieve a submission by id. Returns `None` if not found.
  fn get_submission(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<ContactSubmission>, Self::Error>> + Send + '_;

  /// All submissions, oldest first.
  fn list_submissions(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactSubmission>, Self::Error>> + Send + '_;
}
