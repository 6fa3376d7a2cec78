//! Opening the visitor's mail client after a successful submission.

use anyhow::{Context, Result};

/// Side effect run with the composer URL once the service has accepted a
/// submission. Swappable so the form flow can be exercised without a browser.
pub trait Composer: Send + Sync {
  fn open(&self, url: &str) -> Result<()>;
}

/// Opens the URL with the platform's default handler (usually a browser).
pub struct BrowserComposer;

impl Composer for BrowserComposer {
  fn open(&self, url: &str) -> Result<()> {
    open::that(url).context("launching the default browser")
  }
}
