//! Submission lifecycle state shared with the presentation layer.

use serde::Serialize;

use crate::judge::types::{SubmissionMode, SubmissionOutcome};

/// Lifecycle phase of the current submission.
///
/// Within one submission the phase moves monotonically:
/// `Idle`/`AwaitingFiles` → `InFlight` → `Succeeded` or `Failed`. A new
/// submission always restarts from `InFlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Nothing selected, nothing running
    Idle,
    /// Files staged, no submission started
    AwaitingFiles,
    /// A submission is on the wire
    InFlight,
    /// The latest submission produced an outcome
    Succeeded,
    /// The latest submission ended in an error
    Failed,
}

/// Snapshot of the controller's state.
///
/// One writer (the controller), any number of readers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    pub mode: SubmissionMode,

    /// Display names of the staged files, in submission order
    pub selected_files: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SubmissionOutcome>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionState {
    pub(crate) fn new(mode: SubmissionMode) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            mode,
            selected_files: Vec::new(),
            outcome: None,
            error: None,
        }
    }
}
