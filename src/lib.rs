//! Client engine for the Jurado content evaluation service.
//!
//! Classifies media files, submits them for analysis (single or
//! competition mode), normalizes the service's replies and ranks
//! competition batches. A presentation layer drives a
//! [`SubmissionController`] and renders its [`SubmissionState`]
//! snapshots; the controller is the state's only writer.

pub mod error;
pub mod judge;
pub mod media;
pub mod submission;

pub use error::AnalysisError;
pub use judge::client::{JudgeApi, JudgeClient, JudgeConfig};
pub use judge::ranking::rank;
pub use judge::types::{
    CompetitionPayload, CompetitionReport, CompetitionSynthesis, Medal, RankedVerdict,
    ServiceReply, SubmissionMode, SubmissionOutcome, Verdict,
};
pub use media::{classify, MediaKind, SubmissionFile};
pub use submission::{SubmissionController, SubmissionPhase, SubmissionState};

use tracing_subscriber::EnvFilter;

/// Initialize environment and logging for host applications.
///
/// Loads `.env` (current directory first, then the parent) and installs
/// a `tracing` subscriber honoring `RUST_LOG`; defaults to `warn` with
/// `info` for this crate.
pub fn init_logging() {
    // Load .env - check current dir first, then the parent
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path("../.env");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,jurado_client=info")),
        )
        .init();
}
