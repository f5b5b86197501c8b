//! Recording text typer for testing.
//!
//! # Why a recording typer?
//!
//! [`EnigoTyper`](super::EnigoTyper) makes OS calls that:
//!
//! - Require a desktop session to run.
//! - Actually type into whatever window is focused on the test machine.
//! - Cannot be observed directly from Rust test code.
//!
//! `RecordingTextTyper` replaces the OS call with in-memory recording.  Each
//! typed string is pushed into a `Mutex<Vec<...>>` together with the wall-clock
//! instant it arrived, so tests can assert both *what* was typed and *when*.
//!
//! # Usage in tests
//!
//! ```ignore
//! let typer = Arc::new(RecordingTextTyper::new());
//! let use_case = TypeTextUseCase::new(typer.clone(), Duration::from_secs(2));
//!
//! use_case.accept(TypeRequest::new("hello"))?.handle.await?;
//!
//! assert_eq!(typer.typed(), vec!["hello"]);
//! ```
//!
//! # `should_fail` flag
//!
//! Build with [`RecordingTextTyper::failing`] to simulate an unavailable input
//! facility and exercise the error-logging path.

use std::sync::Mutex;
use std::time::Instant;

use crate::application::type_text::{TextTyper, TypingError};

/// A typer that records every call instead of touching the OS.
#[derive(Debug, Default)]
pub struct RecordingTextTyper {
    /// Each `(text, arrived_at)` pair passed to `type_text`, in call order.
    pub records: Mutex<Vec<(String, Instant)>>,
    /// When `true`, every call returns `TypingError::Unavailable` and records
    /// nothing.
    pub should_fail: bool,
}

impl RecordingTextTyper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Texts typed so far, in call order.
    pub fn typed(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    /// Wall-clock instants at which each text arrived, in call order.
    pub fn typed_at(&self) -> Vec<Instant> {
        self.records.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

impl TextTyper for RecordingTextTyper {
    fn type_text(&self, text: &str) -> Result<(), TypingError> {
        if self.should_fail {
            return Err(TypingError::Unavailable("mock failure".into()));
        }
        self.records
            .lock()
            .unwrap()
            .push((text.to_string(), Instant::now()));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_texts_in_call_order() {
        // Arrange
        let typer = RecordingTextTyper::new();

        // Act
        typer.type_text("first").unwrap();
        typer.type_text("second").unwrap();

        // Assert
        assert_eq!(typer.typed(), vec!["first", "second"]);
        assert_eq!(typer.typed_at().len(), 2);
    }

    #[test]
    fn test_failing_typer_returns_unavailable_and_records_nothing() {
        // Arrange
        let typer = RecordingTextTyper::failing();

        // Act
        let result = typer.type_text("hello");

        // Assert
        assert!(matches!(result, Err(TypingError::Unavailable(_))));
        assert!(typer.typed().is_empty());
    }
}
