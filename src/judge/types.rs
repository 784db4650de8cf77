//! Shared types for the analysis API.
//!
//! Rust field names are English; `#[serde(rename)]` maps them onto the
//! service's wire names, so normalized results re-serialize to the
//! exact JSON shape the presentation layer already renders.

use serde::{Deserialize, Serialize};

/// Which submission workflow is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    Single,
    Competition,
}

impl SubmissionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Competition => "competition",
        }
    }
}

/// Reply envelope shared by every analysis endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ServiceReply<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Normalized verdict for one analyzed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Display name of the item; the service only sets this inside
    /// competition batches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_name: Option<String>,

    /// Reported score. Required for ranking; an absent score orders as
    /// zero but stays absent for display.
    #[serde(rename = "pontuacao", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Maximum possible score as reported by the service
    #[serde(
        rename = "pontuacao_maxima",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    #[serde(
        rename = "pontos_fortes",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub strengths: Vec<String>,

    #[serde(
        rename = "pontos_melhoria",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub improvements: Vec<String>,

    /// Narrative summary
    #[serde(rename = "veredicto", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Per-item error embedded by the service. Promotes to a full
    /// service error in single mode; excludes the entry from ranking in
    /// competition mode.
    #[serde(rename = "erro", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    /// Maximum score with the service's display default of 100.
    ///
    /// Passthrough otherwise: the reported score is not validated
    /// against the maximum.
    pub fn max_score_or_default(&self) -> f64 {
        self.max_score.unwrap_or(100.0)
    }

    /// Score used for ordering; absent scores rank as zero
    pub(crate) fn ranking_score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Aggregate synthesis the service reports over a competition batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSynthesis {
    /// Mean score across the batch, passed through verbatim. Absent
    /// means "not available"; the client never derives its own average,
    /// so client and service numbers cannot silently diverge.
    #[serde(
        rename = "pontuacao_final",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_score: Option<f64>,

    #[serde(
        rename = "veredicto_geral",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_verdict: Option<String>,

    #[serde(rename = "recomendacao", default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    /// Batch-level error embedded by the service; a full-batch failure
    #[serde(rename = "erro", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Raw competition batch as the service reports it, before ranking
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompetitionPayload {
    #[serde(rename = "analises_individuais", default)]
    pub entries: Vec<Verdict>,

    #[serde(rename = "sintese_final", default)]
    pub synthesis: CompetitionSynthesis,
}

/// Top-three distinction, serialized as the glyph the presentation
/// layer renders under `medalha`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Distinction for a 1-based rank position, if any
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }
}

impl Serialize for Medal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

/// A verdict placed in the competition order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVerdict {
    #[serde(flatten)]
    pub verdict: Verdict,

    /// 1-based rank. Strict sequential numbering; tied scores keep
    /// submission order.
    #[serde(rename = "posicao")]
    pub position: usize,

    #[serde(rename = "medalha", skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
}

/// Ranked batch plus the service's synthesis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionReport {
    #[serde(rename = "analises_individuais")]
    pub rankings: Vec<RankedVerdict>,

    #[serde(rename = "sintese_final")]
    pub synthesis: CompetitionSynthesis,

    /// Entries the service could not analyze. Excluded from the
    /// ranking, never assigned a position.
    #[serde(rename = "analises_com_erro", skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<Verdict>,
}

/// Result surfaced to the presentation layer after a successful
/// submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionOutcome {
    Single(Verdict),
    Competition(CompetitionReport),
}
