use thiserror::Error;

use crate::client::ClientError;
use crate::phase::Phase;
use crate::report::ResearchReport;

/// State for one display session of research results.
///
/// Holds the immutable report snapshot (or the failure message) from the
/// most recent submission. The report is replaced, never mutated: a new
/// submission clears it, and settlement stores the next one wholesale.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    report: Option<ResearchReport>,
    error: Option<String>,
}

impl Session {
    /// Creates an idle session with no report.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The report from the last completed submission, if any.
    pub fn report(&self) -> Option<&ResearchReport> {
        self.report.as_ref()
    }

    /// The failure message from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a submission as in flight.
    ///
    /// At most one request may be outstanding; while running, further
    /// submissions are rejected. Clears the previous report and error so
    /// the session renders only the pending state.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.phase.is_running() {
            return Err(SessionError::AlreadyRunning);
        }
        self.phase = Phase::Running;
        self.report = None;
        self.error = None;
        Ok(())
    }

    /// Settles the in-flight submission. The single exit point for both
    /// success and failure.
    pub fn settle(&mut self, outcome: Result<ResearchReport, ClientError>) {
        match outcome {
            Ok(report) => {
                self.report = Some(report);
                self.phase = Phase::Complete;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = Phase::Failed;
            }
        }
    }
}

/// Errors that can occur driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("A research request is already in flight")]
    AlreadyRunning,
}
