//! Reply envelope interpretation.
//!
//! Every analysis endpoint answers with the same `{success, data,
//! error}` envelope; normalization is independent of which endpoint was
//! called.

use crate::error::{AnalysisError, GENERIC_ANALYSIS_ERROR};
use crate::judge::types::{CompetitionPayload, ServiceReply, Verdict};

fn unwrap_reply<T>(reply: ServiceReply<T>) -> Result<T, AnalysisError> {
    if reply.success {
        // A success envelope with no payload still failed to deliver a
        // usable result
        reply
            .data
            .ok_or_else(|| AnalysisError::Service(GENERIC_ANALYSIS_ERROR.to_string()))
    } else {
        Err(AnalysisError::Service(
            reply
                .error
                .unwrap_or_else(|| GENERIC_ANALYSIS_ERROR.to_string()),
        ))
    }
}

/// Normalize a single-mode reply into a verdict
pub fn normalize_single(reply: ServiceReply<Verdict>) -> Result<Verdict, AnalysisError> {
    let verdict = unwrap_reply(reply)?;
    match verdict.error {
        Some(message) => Err(AnalysisError::Service(message)),
        None => Ok(verdict),
    }
}

/// Normalize a competition-mode reply into the raw batch.
///
/// A batch whose synthesis carries an embedded error is a full-batch
/// failure, not a partially usable result.
pub fn normalize_competition(
    reply: ServiceReply<CompetitionPayload>,
) -> Result<CompetitionPayload, AnalysisError> {
    let payload = unwrap_reply(reply)?;
    match payload.synthesis.error {
        Some(ref message) => Err(AnalysisError::Service(message.clone())),
        None => Ok(payload),
    }
}
