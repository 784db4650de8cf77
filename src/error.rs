//! Unified error surface for the submission workflow.
//!
//! Every failure resolves to one [`AnalysisError`] kind; the rendered
//! message is what the presentation layer shows. Validation and
//! classification failures are synchronous and pre-empt any request.

use thiserror::Error;

/// Fallback when the service reports a failure without error text
pub const GENERIC_ANALYSIS_ERROR: &str = "Ocorreu um erro na análise.";

/// Fallback when no usable reply reaches the client. Distinct from any
/// service-reported message.
pub const CONNECTION_ERROR: &str = "Erro de conexão com o servidor. O back-end está rodando?";

/// Why a submission failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Guard failure before any request was built (nothing selected,
    /// unreadable file)
    #[error("{0}")]
    Validation(String),

    /// Content type outside the four supported kinds; carries the
    /// offending type verbatim. Single-file mode only.
    #[error("Tipo de arquivo \"{0}\" não suportado.")]
    UnsupportedMedia(String),

    /// The service replied, but with a failure envelope
    #[error("{0}")]
    Service(String),

    /// The call never produced a usable reply
    #[error("{0}")]
    Transport(String),

    /// The in-flight submission was aborted or superseded
    #[error("Análise cancelada pelo usuário.")]
    Canceled,
}

impl AnalysisError {
    /// Presentation-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}
