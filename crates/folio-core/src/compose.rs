//! Pre-filled email composer links.
//!
//! After a successful submission the client hands the visitor a Gmail compose
//! window addressed to the site owner, carrying the same subject and message.

use crate::submission::ContactForm;

const GMAIL_COMPOSE: &str = "https://mail.google.com/mail/?view=cm&fs=1";

/// The message body placed in the composer.
pub fn compose_body(form: &ContactForm) -> String {
  format!(
    "From: {} ({})\n\nMessage:\n{}",
    form.name, form.email, form.message
  )
}

/// Gmail compose URL addressed to `recipient`, with subject and body taken
/// from `form`. All query values are percent-encoded.
pub fn gmail_compose_url(recipient: &str, form: &ContactForm) -> String {
  format!(
    "{GMAIL_COMPOSE}&to={}&su={}&body={}",
    urlencoding::encode(recipient),
    urlencoding::encode(&form.subject),
    urlencoding::encode(&compose_body(form)),
  )
}
