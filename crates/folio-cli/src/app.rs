//! Application state and event dispatcher for the contact form.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::{
  compose::gmail_compose_url,
  submission::{ContactForm, Field},
};
use uuid::Uuid;

use crate::{client::ApiClient, compose::Composer};

// ─── Status ───────────────────────────────────────────────────────────────────

/// One-line feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
  /// Nothing to report; the status bar shows key hints.
  Idle,
  Success(String),
  Failure(String),
}

pub const SENT_MSG: &str =
  "Message sent successfully! Thank you for reaching out, I'll get back to you soon.";
pub const FAILED_MSG: &str =
  "Error sending message. Please try again or email me directly.";

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// The draft being edited. Survives failed submissions.
  pub form: ContactForm,

  /// Field receiving keystrokes.
  pub focus: Field,

  pub status: Status,

  /// Identifier returned for the last accepted submission.
  pub last_id: Option<Uuid>,

  /// Address the composer is pre-addressed to.
  pub recipient: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,

  pub composer: Box<dyn Composer>,
}

impl App {
  pub fn new(client: ApiClient, composer: Box<dyn Composer>, recipient: String) -> Self {
    Self {
      form: ContactForm::default(),
      focus: Field::Name,
      status: Status::Idle,
      last_id: None,
      recipient,
      client: Arc::new(client),
      composer,
    }
  }

  // ── Submission ────────────────────────────────────────────────────────────

  /// Send the draft. Never sends while a field is empty.
  ///
  /// On success the draft is cleared and the composer is opened with the
  /// submitted data; on failure the draft is kept for another attempt.
  pub async fn submit(&mut self) {
    let missing = self.form.missing_fields();
    if let Some(first) = missing.first() {
      let names: Vec<_> = missing.iter().map(|f| f.as_str()).collect();
      self.status = Status::Failure(format!("Please fill in: {}", names.join(", ")));
      self.focus = *first;
      return;
    }

    match self.client.submit_contact(&self.form).await {
      Ok(receipt) => {
        tracing::info!(id = %receipt.id, message = %receipt.message, "submission accepted");
        let url = gmail_compose_url(&self.recipient, &self.form);
        self.form.clear();
        self.focus = Field::Name;
        self.last_id = Some(receipt.id);
        self.status = match self.composer.open(&url) {
          Ok(()) => Status::Success(SENT_MSG.to_string()),
          Err(e) => {
            tracing::warn!(error = %e, "could not open composer");
            Status::Success(format!("{SENT_MSG} Email me via: {url}"))
          }
        };
      }
      Err(e) => {
        tracing::warn!(error = %e, "submission failed");
        self.status = Status::Failure(FAILED_MSG.to_string());
      }
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
      match key.code {
        KeyCode::Char('c') => return Ok(false),
        KeyCode::Char('s') => self.submit().await,
        _ => {}
      }
      return Ok(true);
    }

    match key.code {
      KeyCode::Esc => return Ok(false),

      // Navigation
      KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
      KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),

      // The message is multi-line; other fields advance on Enter.
      KeyCode::Enter if self.focus == Field::Message => {
        self.form.message.push('\n');
      }
      KeyCode::Enter => self.focus = self.focus.next(),

      // Editing clears any previous outcome from the status bar.
      KeyCode::Backspace => {
        self.form.get_mut(self.focus).pop();
        self.status = Status::Idle;
      }
      KeyCode::Char(c) => {
        self.form.get_mut(self.focus).push(c);
        self.status = Status::Idle;
      }

      _ => {}
    }
    Ok(true)
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
