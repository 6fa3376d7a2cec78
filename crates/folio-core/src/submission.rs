//! Contact submissions — the draft a visitor fills in and the record the
//! service keeps.
//!
//! A [`ContactForm`] is untrusted input. The only way to obtain a
//! [`NewSubmission`] is [`ContactForm::validate`], so every record that
//! reaches a store has all four fields present.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, ValidationError};

// ─── Fields ──────────────────────────────────────────────────────────────────

/// One of the four visitor-supplied fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Name,
  Email,
  Subject,
  Message,
}

impl Field {
  pub const ALL: [Field; 4] =
    [Field::Name, Field::Email, Field::Subject, Field::Message];

  pub fn as_str(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Email => "email",
      Field::Subject => "subject",
      Field::Message => "message",
    }
  }

  /// The field after this one, wrapping from `Message` back to `Name`.
  pub fn next(self) -> Field {
    match self {
      Field::Name => Field::Email,
      Field::Email => Field::Subject,
      Field::Subject => Field::Message,
      Field::Message => Field::Name,
    }
  }

  /// The field before this one, wrapping from `Name` to `Message`.
  pub fn prev(self) -> Field {
    match self {
      Field::Name => Field::Message,
      Field::Email => Field::Name,
      Field::Subject => Field::Email,
      Field::Message => Field::Subject,
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// The four free-text fields of the contact form, exactly as typed.
///
/// This is both the client's local draft and the JSON body it sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl ContactForm {
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Email => &self.email,
      Field::Subject => &self.subject,
      Field::Message => &self.message,
    }
  }

  pub fn get_mut(&mut self, field: Field) -> &mut String {
    match field {
      Field::Name => &mut self.name,
      Field::Email => &mut self.email,
      Field::Subject => &mut self.subject,
      Field::Message => &mut self.message,
    }
  }

  /// Fields that are currently empty, in form order.
  ///
  /// Only emptiness counts: whitespace is content, and the email address is
  /// not checked for shape.
  pub fn missing_fields(&self) -> Vec<Field> {
    Field::ALL
      .into_iter()
      .filter(|f| self.get(*f).is_empty())
      .collect()
  }

  pub fn is_complete(&self) -> bool { self.missing_fields().is_empty() }

  /// Reset every field to the empty string.
  pub fn clear(&mut self) { *self = Self::default(); }

  /// Check that all four fields are present and promote the draft to a
  /// [`NewSubmission`].
  pub fn validate(self) -> Result<NewSubmission, ValidationError> {
    let missing = self.missing_fields();
    if !missing.is_empty() {
      return Err(ValidationError::new(missing));
    }
    Ok(NewSubmission { form: self })
  }
}

// ─── Validated input ─────────────────────────────────────────────────────────

/// A contact form that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
  form: ContactForm,
}

impl NewSubmission {
  pub fn name(&self) -> &str { &self.form.name }

  pub fn email(&self) -> &str { &self.form.email }

  pub fn subject(&self) -> &str { &self.form.subject }

  pub fn message(&self) -> &str { &self.form.message }

  /// Build the persisted record. Classification and status are fixed here,
  /// never taken from the caller.
  pub fn into_submission(
    self,
    id: Uuid,
    created_at: DateTime<Utc>,
  ) -> ContactSubmission {
    let ContactForm { name, email, subject, message } = self.form;
    ContactSubmission {
      id,
      name,
      email,
      subject,
      message,
      form_type: FormType::Contact,
      status: SubmissionStatus::New,
      created_at,
    }
  }
}

// ─── Tags ────────────────────────────────────────────────────────────────────

/// Which form a submission came from. The site has a single form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
  #[default]
  Contact,
}

impl FormType {
  pub fn as_str(self) -> &'static str {
    match self {
      FormType::Contact => "contact",
    }
  }
}

impl FromStr for FormType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "contact" => Ok(FormType::Contact),
      other => Err(Error::UnknownFormType(other.to_owned())),
    }
  }
}

/// Workflow tag on a submission. Nothing in this workspace advances it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
  #[default]
  New,
}

impl SubmissionStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      SubmissionStatus::New => "new",
    }
  }
}

impl FromStr for SubmissionStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "new" => Ok(SubmissionStatus::New),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// One accepted contact submission. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub form_type:  FormType,
  pub status:     SubmissionStatus,
  pub created_at: DateTime<Utc>,
}
