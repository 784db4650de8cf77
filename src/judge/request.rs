//! Outbound request construction.
//!
//! Builds the multipart forms the analysis endpoints expect. Blank
//! criteria are substituted with the mode's default here, at build
//! time, so the default always matches the mode actually submitted.
//! No I/O happens in this module.

use reqwest::multipart::{Form, Part};

use crate::error::AnalysisError;
use crate::judge::types::SubmissionMode;
use crate::media::SubmissionFile;

/// Criteria applied when a single-mode caller leaves the field blank
pub const DEFAULT_SINGLE_CRITERIA: &str = "Análise geral de qualidade";

/// Criteria applied when a competition-mode caller leaves the field blank
pub const DEFAULT_COMPETITION_CRITERIA: &str = "Avaliação comparativa de qualidade";

/// Criteria text actually submitted: the caller's text, or the mode
/// default when blank
pub fn effective_criteria(mode: SubmissionMode, criteria: &str) -> String {
    if criteria.trim().is_empty() {
        match mode {
            SubmissionMode::Single => DEFAULT_SINGLE_CRITERIA.to_string(),
            SubmissionMode::Competition => DEFAULT_COMPETITION_CRITERIA.to_string(),
        }
    } else {
        criteria.to_string()
    }
}

fn file_part(file: &SubmissionFile) -> Result<Part, AnalysisError> {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.content_type)
        .map_err(|_| {
            AnalysisError::Validation(format!(
                "Tipo de conteúdo inválido: {}",
                file.content_type
            ))
        })
}

/// Form for a single-file submission: one `file` part plus `criteria`
pub fn single_form(file: &SubmissionFile, criteria: &str) -> Result<Form, AnalysisError> {
    Ok(Form::new()
        .part("file", file_part(file)?)
        .text("criteria", effective_criteria(SubmissionMode::Single, criteria)))
}

/// Form for a competition submission: every file attached under the
/// shared `files` field, order preserved, plus `criteria`
pub fn competition_form(
    files: &[SubmissionFile],
    criteria: &str,
) -> Result<Form, AnalysisError> {
    let mut form = Form::new();
    for file in files {
        form = form.part("files", file_part(file)?);
    }
    Ok(form.text(
        "criteria",
        effective_criteria(SubmissionMode::Competition, criteria),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> SubmissionFile {
        SubmissionFile::from_bytes(name, "application/pdf", b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_blank_criteria_gets_mode_default() {
        assert_eq!(
            effective_criteria(SubmissionMode::Single, ""),
            DEFAULT_SINGLE_CRITERIA
        );
        assert_eq!(
            effective_criteria(SubmissionMode::Competition, "   "),
            DEFAULT_COMPETITION_CRITERIA
        );
    }

    #[test]
    fn test_non_blank_criteria_passes_through_untrimmed() {
        assert_eq!(
            effective_criteria(SubmissionMode::Single, " originalidade "),
            " originalidade "
        );
    }

    #[test]
    fn test_defaults_differ_per_mode() {
        assert_ne!(DEFAULT_SINGLE_CRITERIA, DEFAULT_COMPETITION_CRITERIA);
    }

    #[test]
    fn test_single_form_builds() {
        assert!(single_form(&pdf("contrato.pdf"), "").is_ok());
    }

    #[test]
    fn test_competition_form_accepts_mixed_kinds() {
        let files = vec![
            pdf("contrato.pdf"),
            SubmissionFile::from_bytes("musica.mp3", "audio/mpeg", vec![0xff, 0xfb]),
            SubmissionFile::from_bytes("dados.bin", "application/octet-stream", vec![0x00]),
        ];
        // The multi-item endpoint is not type-filtered
        assert!(competition_form(&files, "comparar").is_ok());
    }

    #[test]
    fn test_invalid_content_type_is_a_validation_error() {
        let file = SubmissionFile::from_bytes("x", "not a mime type", Vec::new());
        let err = single_form(&file, "").unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }
}
