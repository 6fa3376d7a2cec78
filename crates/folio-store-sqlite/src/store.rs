//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use folio_core::{
  store::SubmissionStore,
  submission::{ContactSubmission, NewSubmission},
};

use crate::{
  encode::{encode_dt, encode_uuid, RawSubmission, SUBMISSION_COLUMNS},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A submission store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("submission schema ready");
    Ok(())
  }

  /// Insert a fully-built [`ContactSubmission`].
  async fn insert(&self, submission: &ContactSubmission) -> Result<()> {
    let id_str         = encode_uuid(submission.id);
    let name           = submission.name.clone();
    let email          = submission.email.clone();
    let subject        = submission.subject.clone();
    let message        = submission.message.clone();
    let form_type_str  = submission.form_type.as_str();
    let status_str     = submission.status.as_str();
    let created_at_str = encode_dt(submission.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contact_submissions (
             id, name, email, subject, message, form_type, status, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            name,
            email,
            subject,
            message,
            form_type_str,
            status_str,
            created_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = crate::Error;

  async fn record_submission(&self, input: NewSubmission) -> Result<ContactSubmission> {
    // Match the stored precision so the returned record equals a later read.
    let created_at = Utc::now().trunc_subsecs(6);
    let submission = input.into_submission(Uuid::new_v4(), created_at);
    self.insert(&submission).await?;
    tracing::debug!(id = %submission.id, "inserted contact submission");
    Ok(submission)
  }

  async fn get_submission(&self, id: Uuid) -> Result<Option<ContactSubmission>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSubmission> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {SUBMISSION_COLUMNS} FROM contact_submissions WHERE id = ?1"
            ),
            rusqlite::params![id_str],
            RawSubmission::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSubmission::into_submission).transpose()
  }

  async fn list_submissions(&self) -> Result<Vec<ContactSubmission>> {
    let raws: Vec<RawSubmission> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SUBMISSION_COLUMNS} FROM contact_submissions
           ORDER BY created_at, rowid"
        ))?;
        let rows = stmt
          .query_map([], RawSubmission::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubmission::into_submission).collect()
  }
}
