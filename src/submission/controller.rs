//! The submission state machine.
//!
//! Owns the lifecycle of one submission at a time: validation guards,
//! the in-flight remote call and the commit of its outcome. A monotonic
//! generation counter makes commits last-submission-wins: a superseded
//! or canceled call never overwrites newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::Notify;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::judge::client::{JudgeApi, JudgeClient};
use crate::judge::types::{SubmissionMode, SubmissionOutcome};
use crate::media::SubmissionFile;
use crate::submission::state::{SubmissionPhase, SubmissionState};

const NO_FILE_SELECTED: &str = "Por favor, selecione um arquivo.";
const NO_FILES_SELECTED: &str = "Por favor, selecione pelo menos um arquivo.";

/// Drives submissions against the analysis service and exposes their
/// lifecycle to the presentation layer.
///
/// No caching, no retries: a failed submission requires a new
/// [`submit`](Self::submit) call.
pub struct SubmissionController<A: JudgeApi = JudgeClient> {
    api: Arc<A>,
    mode: SubmissionMode,
    files: Mutex<Vec<SubmissionFile>>,
    state: RwLock<SubmissionState>,
    /// Current submission generation; stale generations may not commit
    generation: AtomicU64,
    cancel: Notify,
}

impl SubmissionController<JudgeClient> {
    /// Controller backed by a client configured from the environment
    pub fn new(mode: SubmissionMode) -> Self {
        Self::with_api(Arc::new(JudgeClient::from_env()), mode)
    }
}

impl<A: JudgeApi> SubmissionController<A> {
    pub fn with_api(api: Arc<A>, mode: SubmissionMode) -> Self {
        Self {
            api,
            mode,
            files: Mutex::new(Vec::new()),
            state: RwLock::new(SubmissionState::new(mode)),
            generation: AtomicU64::new(0),
            cancel: Notify::new(),
        }
    }

    pub fn mode(&self) -> SubmissionMode {
        self.mode
    }

    /// Current state snapshot
    pub fn state(&self) -> SubmissionState {
        self.state.read().unwrap().clone()
    }

    /// Stage a new file set, clearing any previous outcome or error.
    ///
    /// Does not start a submission.
    pub fn select_files(&self, files: Vec<SubmissionFile>) {
        let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
        *self.files.lock().unwrap() = files;

        let mut state = self.state.write().unwrap();
        state.phase = SubmissionPhase::AwaitingFiles;
        state.selected_files = names;
        state.outcome = None;
        state.error = None;
    }

    /// Abort the in-flight submission, if any.
    ///
    /// The current call is superseded and its eventual reply discarded;
    /// the state lands in `Failed` with the canceled kind. No-op when
    /// nothing is in flight.
    pub fn cancel(&self) {
        let mut state = self.state.write().unwrap();
        if state.phase != SubmissionPhase::InFlight {
            return;
        }
        // Invalidate the in-flight generation so its commit is refused
        self.generation.fetch_add(1, Ordering::SeqCst);
        state.phase = SubmissionPhase::Failed;
        state.error = Some(AnalysisError::Canceled.to_string());
        drop(state);

        tracing::info!("[Submission] canceled by caller");
        self.cancel.notify_waiters();
    }

    /// Run one submission: guards, remote call, commit.
    ///
    /// Fails fast with no network activity when nothing is staged.
    /// A newer `submit` supersedes this one; the superseded call
    /// returns the canceled kind and leaves state untouched.
    pub async fn submit(&self, criteria: &str) -> Result<SubmissionOutcome, AnalysisError> {
        let files = self.files.lock().unwrap().clone();

        if files.is_empty() {
            let message = match self.mode {
                SubmissionMode::Single => NO_FILE_SELECTED,
                SubmissionMode::Competition => NO_FILES_SELECTED,
            };
            let error = AnalysisError::Validation(message.to_string());
            self.fail_validation(&error);
            return Err(error);
        }

        let submission_id = format!("sub-{}", Uuid::new_v4());
        let token = self.begin(&submission_id);

        let call = async {
            match self.mode {
                SubmissionMode::Single => self
                    .api
                    .analyze_single(&files[0], criteria)
                    .await
                    .map(SubmissionOutcome::Single),
                SubmissionMode::Competition => self
                    .api
                    .analyze_competition(&files, criteria)
                    .await
                    .map(SubmissionOutcome::Competition),
            }
        };

        let result = tokio::select! {
            result = call => result,
            // cancel() already recorded the Failed state
            _ = self.cancel.notified() => {
                tracing::info!("[Submission] {} aborted", submission_id);
                return Err(AnalysisError::Canceled);
            }
        };

        match result {
            Ok(outcome) => {
                if self.commit(token, Ok(&outcome)) {
                    tracing::info!("[Submission] {} succeeded", submission_id);
                    Ok(outcome)
                } else {
                    tracing::info!("[Submission] {} superseded, result discarded", submission_id);
                    Err(AnalysisError::Canceled)
                }
            }
            Err(error) => {
                if self.commit(token, Err(&error)) {
                    tracing::warn!("[Submission] {} failed: {}", submission_id, error);
                } else {
                    tracing::info!("[Submission] {} superseded, error discarded", submission_id);
                }
                Err(error)
            }
        }
    }

    /// Enter `InFlight` under a fresh generation, discarding prior
    /// results
    fn begin(&self, submission_id: &str) -> u64 {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut state = self.state.write().unwrap();
        state.phase = SubmissionPhase::InFlight;
        state.outcome = None;
        state.error = None;
        drop(state);

        tracing::info!(
            "[Submission] {} in flight ({})",
            submission_id,
            self.mode.as_str()
        );
        token
    }

    /// Commit an outcome if this submission is still the current one
    fn commit(&self, token: u64, result: Result<&SubmissionOutcome, &AnalysisError>) -> bool {
        let mut state = self.state.write().unwrap();
        if self.generation.load(Ordering::SeqCst) != token {
            return false;
        }
        match result {
            Ok(outcome) => {
                state.phase = SubmissionPhase::Succeeded;
                state.outcome = Some(outcome.clone());
                state.error = None;
            }
            Err(error) => {
                state.phase = SubmissionPhase::Failed;
                state.error = Some(error.to_string());
            }
        }
        true
    }

    /// Record a pre-network guard failure. The prior outcome stays
    /// visible alongside the message.
    fn fail_validation(&self, error: &AnalysisError) {
        let mut state = self.state.write().unwrap();
        state.phase = SubmissionPhase::Failed;
        state.error = Some(error.to_string());
        tracing::warn!("[Submission] rejected before submit: {}", error);
    }
}
