//! Production keystroke injection via the `enigo` crate.
//!
//! # What does enigo do? (for beginners)
//!
//! `enigo` wraps each OS's input synthesis API behind one interface:
//!
//! | OS      | Underlying API                          |
//! |---------|-----------------------------------------|
//! | Windows | `SendInput`                             |
//! | Linux   | XTest (X11) or libei / wayland protocols |
//! | macOS   | `CGEventPost` (needs Accessibility permission) |
//!
//! Events produced this way are delivered to the focused window exactly like
//! physical key presses.  `Keyboard::text` types a whole string, including
//! characters that have no key on the current layout.
//!
//! # Connection per job
//!
//! A fresh [`Enigo`] connection is opened for every job and dropped when the
//! job ends.  On Linux that connection is a display handle which is not safe
//! to share across threads, and jobs run on arbitrary blocking-pool threads.

use enigo::{Enigo, Keyboard, Settings};
use tracing::trace;

use crate::application::type_text::{TextTyper, TypingError};

/// [`TextTyper`] backed by the host's input synthesis facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnigoTyper;

impl EnigoTyper {
    pub fn new() -> Self {
        Self
    }
}

impl TextTyper for EnigoTyper {
    /// # Errors
    ///
    /// - [`TypingError::Unavailable`] if no input connection can be opened
    ///   (for example, no `DISPLAY` on Linux or a missing Accessibility grant
    ///   on macOS).
    /// - [`TypingError::Injection`] if the OS rejects the synthesized events.
    fn type_text(&self, text: &str) -> Result<(), TypingError> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| TypingError::Unavailable(e.to_string()))?;
        trace!(bytes = text.len(), "injecting text");
        enigo
            .text(text)
            .map_err(|e| TypingError::Injection(e.to_string()))
    }
}
