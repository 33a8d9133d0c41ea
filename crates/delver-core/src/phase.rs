use serde::{Deserialize, Serialize};

/// Lifecycle of one research submission.
///
/// Transitions are driven only by real request settlement:
/// Idle → Running → Complete | Failed, and back to Running on resubmission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No request submitted yet
    #[default]
    Idle,
    /// A request is in flight; submissions are blocked
    Running,
    /// The last request returned a report
    Complete,
    /// The last request failed
    Failed,
}

impl Phase {
    /// Returns true while a request is outstanding.
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    /// Returns true once the last request has settled, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, Phase::Complete | Phase::Failed)
    }

    /// Returns a human-readable name for the phase.
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Running => "Running",
            Phase::Complete => "Complete",
            Phase::Failed => "Failed",
        }
    }
}
