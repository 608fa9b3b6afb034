use super::*;

/// The bottom status line. Flashed messages replace the current one for a
/// few seconds and then give way to it again.
pub(crate) struct StatusLine {
  flash: Option<Flash>,
  message: String,
}

struct Flash {
  expires_at: Instant,
  original: String,
}

impl StatusLine {
  pub(crate) fn flash(&mut self, message: String) {
    self.flash_for(message, FLASH_DURATION);
  }

  pub(crate) fn flash_for(&mut self, message: String, duration: Duration) {
    let original = self
      .flash
      .take()
      .map_or_else(|| self.message.clone(), |flash| flash.original);

    self.flash = Some(Flash {
      expires_at: Instant::now() + duration,
      original,
    });

    self.message = message;
  }

  pub(crate) fn new(message: &str) -> Self {
    Self {
      flash: None,
      message: message.to_string(),
    }
  }

  /// Restores the message a flash replaced once the flash has expired.
  pub(crate) fn refresh(&mut self) {
    if self
      .flash
      .as_ref()
      .is_some_and(|flash| Instant::now() >= flash.expires_at)
      && let Some(flash) = self.flash.take()
    {
      self.message = flash.original;
    }
  }

  pub(crate) fn set(&mut self, message: &str) {
    self.flash = None;
    message.clone_into(&mut self.message);
  }

  pub(crate) fn text(&self) -> &str {
    &self.message
  }
}
