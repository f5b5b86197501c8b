//! TypeTextUseCase: turns an accepted request into a deferred typing job.
//!
//! This use case sits at the application layer and delegates to a
//! [`TextTyper`] trait object for OS-level keystroke injection.  The
//! production implementation lives in the infrastructure layer.
//!
//! # Job lifecycle
//!
//! ```text
//! accept(request)
//!   ├─ text missing/empty ─────────────► Err(RequestError::NoText), nothing spawned
//!   ├─ text not a string ──────────────► Err(RequestError::NotText), nothing spawned
//!   └─ text present
//!        └─ tokio::spawn ──► sleep_until(accepted_at + delay)
//!                              └─ spawn_blocking ──► typer.type_text(text)
//!                                                      └─ outcome logged, never returned
//! ```
//!
//! `accept` returns as soon as the task is spawned.  Jobs are independent:
//! two requests accepted close together may interleave their keystrokes in
//! the focused window.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::{RequestError, TypeRequest};

/// Error type for keystroke injection.
#[derive(Debug, Error)]
pub enum TypingError {
    /// The input facility could not be opened (no display session, missing
    /// accessibility permission, ...).
    #[error("input facility unavailable: {0}")]
    Unavailable(String),
    /// The facility was opened but typing the text failed.
    #[error("keystroke injection failed: {0}")]
    Injection(String),
}

/// "Type this string into whatever currently has keyboard focus."
#[cfg_attr(test, mockall::automock)]
pub trait TextTyper: Send + Sync {
    /// Synthesizes keystrokes for `text`, character for character.
    ///
    /// Blocking: implementations talk to the OS synchronously.
    fn type_text(&self, text: &str) -> Result<(), TypingError>;
}

/// Handle to a scheduled typing job.
///
/// Dropping it detaches the job; the HTTP handler does exactly that.
#[derive(Debug)]
pub struct TypingJob {
    /// Identifier used to correlate the job's log lines.
    pub id: Uuid,
    pub handle: JoinHandle<()>,
}

/// The Type Text use case.
pub struct TypeTextUseCase {
    typer: Arc<dyn TextTyper>,
    delay: Duration,
}

impl TypeTextUseCase {
    /// Creates a new use case with the given typer and pre-typing delay.
    pub fn new(typer: Arc<dyn TextTyper>, delay: Duration) -> Self {
        Self { typer, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validates `request` and schedules exactly one typing job for it.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NoText`] if the request carries no text, or
    /// [`RequestError::NotText`] if `text` is not a string; no job is
    /// scheduled in either case.
    pub fn accept(&self, request: TypeRequest) -> Result<TypingJob, RequestError> {
        let text = request.into_text()?;
        Ok(self.schedule(text))
    }

    /// Spawns the deferred typing task for already-validated `text`.
    ///
    /// The deadline is fixed here, at acceptance time, not when the task is
    /// first polled.
    pub fn schedule(&self, text: String) -> TypingJob {
        let id = Uuid::new_v4();
        let deadline = Instant::now() + self.delay;
        let typer = Arc::clone(&self.typer);

        info!(
            job_id = %id,
            chars = text.chars().count(),
            delay_ms = delay_millis(self.delay),
            "typing job scheduled"
        );

        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            debug!(job_id = %id, "typing job started");

            match tokio::task::spawn_blocking(move || typer.type_text(&text)).await {
                Ok(Ok(())) => info!(job_id = %id, "typing job finished"),
                Ok(Err(e)) => error!(job_id = %id, "typing job failed: {e}"),
                Err(e) => error!(job_id = %id, "typing job panicked or was cancelled: {e}"),
            }
        });

        TypingJob { id, handle }
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`.
fn delay_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::input_emulation::mock::RecordingTextTyper;

    fn make_use_case() -> (TypeTextUseCase, Arc<RecordingTextTyper>) {
        let typer = Arc::new(RecordingTextTyper::new());
        let uc = TypeTextUseCase::new(
            Arc::clone(&typer) as Arc<dyn TextTyper>,
            Duration::from_secs(2),
        );
        (uc, typer)
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_accept_rejects_missing_text_without_scheduling() {
        // Arrange
        let mut mock = MockTextTyper::new();
        mock.expect_type_text().never();
        let uc = TypeTextUseCase::new(Arc::new(mock), Duration::ZERO);

        // Act
        let result = uc.accept(TypeRequest::default());

        // Assert
        assert_eq!(result.unwrap_err(), RequestError::NoText);
    }

    #[tokio::test]
    async fn test_accept_rejects_empty_text_without_scheduling() {
        let mut mock = MockTextTyper::new();
        mock.expect_type_text().never();
        let uc = TypeTextUseCase::new(Arc::new(mock), Duration::ZERO);

        assert!(uc.accept(TypeRequest::new("")).is_err());
    }

    #[tokio::test]
    async fn test_accept_rejects_non_string_text_without_scheduling() {
        let mut mock = MockTextTyper::new();
        mock.expect_type_text().never();
        let uc = TypeTextUseCase::new(Arc::new(mock), Duration::ZERO);
        let request = TypeRequest {
            text: Some(serde_json::json!(42)),
        };

        assert_eq!(uc.accept(request).unwrap_err(), RequestError::NotText);
    }

    #[test]
    fn test_delay_millis_saturates_instead_of_truncating() {
        assert_eq!(delay_millis(Duration::from_secs(2)), 2000);
        assert_eq!(delay_millis(Duration::MAX), u64::MAX);
    }

    // ── Delay semantics ───────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_accept_returns_before_delay_elapses() {
        // Arrange
        let (uc, typer) = make_use_case();
        let start = Instant::now();

        // Act
        let _job = uc.accept(TypeRequest::new("hello")).unwrap();

        // Assert: no virtual time has passed and nothing is typed yet
        assert_eq!(Instant::now(), start);
        assert!(typer.typed().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_injection_before_delay() {
        // Arrange
        let (uc, typer) = make_use_case();
        let job = uc.accept(TypeRequest::new("hello")).unwrap();

        // Act: stop one millisecond short of the deadline
        tokio::time::advance(Duration::from_millis(1_999)).await;
        tokio::task::yield_now().await;

        // Assert
        assert!(typer.typed().is_empty());

        // Act: cross the deadline
        tokio::time::advance(Duration::from_millis(1)).await;
        job.handle.await.unwrap();

        // Assert
        assert_eq!(typer.typed(), vec!["hello".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_types_after_delay() {
        // Arrange
        let (uc, typer) = make_use_case();
        let start = Instant::now();

        // Act
        let job = uc.accept(TypeRequest::new("hello")).unwrap();
        job.handle.await.unwrap();

        // Assert
        assert!(Instant::now() - start >= Duration::from_secs(2));
        assert_eq!(typer.typed(), vec!["hello".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_is_passed_verbatim_to_typer() {
        // Arrange
        let text = "Line 1\nTab\there — ünïcødé 🎹";
        let mut mock = MockTextTyper::new();
        mock.expect_type_text()
            .withf(move |t: &str| t == text)
            .times(1)
            .returning(|_| Ok(()));
        let uc = TypeTextUseCase::new(Arc::new(mock), Duration::from_secs(2));

        // Act
        let job = uc.accept(TypeRequest::new(text)).unwrap();

        // Assert: the mock verifies the argument and call count on drop
        job.handle.await.unwrap();
    }

    // ── Concurrency ───────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_each_accepted_request_schedules_its_own_job() {
        // Arrange
        let (uc, typer) = make_use_case();

        // Act
        let first = uc.accept(TypeRequest::new("one")).unwrap();
        let second = uc.accept(TypeRequest::new("two")).unwrap();

        // Assert: both accepted before either fired
        assert!(typer.typed().is_empty());
        assert_ne!(first.id, second.id);

        first.handle.await.unwrap();
        second.handle.await.unwrap();

        let mut typed = typer.typed();
        typed.sort();
        assert_eq!(typed, vec!["one".to_string(), "two".to_string()]);
    }

    // ── Failure handling ──────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_typing_failure_is_contained_in_the_job() {
        // Arrange
        let mut mock = MockTextTyper::new();
        mock.expect_type_text()
            .times(1)
            .returning(|_| Err(TypingError::Unavailable("no display".into())));
        let uc = TypeTextUseCase::new(Arc::new(mock), Duration::from_secs(2));

        // Act
        let job = uc.accept(TypeRequest::new("hello")).unwrap();

        // Assert: the task completes normally; the error is only logged
        assert!(job.handle.await.is_ok());
    }

    #[test]
    fn test_typing_error_display() {
        let err = TypingError::Injection("boom".into());
        assert_eq!(err.to_string(), "keystroke injection failed: boom");
    }
}
