//! Error types for `folio-core`.

use std::fmt;

use thiserror::Error;

use crate::submission::Field;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown form type: {0:?}")]
  UnknownFormType(String),

  #[error("unknown submission status: {0:?}")]
  UnknownStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A contact form was submitted with one or more required fields empty.
///
/// The display text is the message returned to HTTP callers; the individual
/// fields are kept for logging and for the client's status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
  missing: Vec<Field>,
}

impl ValidationError {
  pub(crate) fn new(missing: Vec<Field>) -> Self { Self { missing } }

  /// The fields that were empty, in form order.
  pub fn missing(&self) -> &[Field] { &self.missing }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("All fields are required")
  }
}

impl std::error::Error for ValidationError {}
