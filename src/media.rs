//! Media kind classification for single-file submissions.
//!
//! The analysis service exposes one endpoint per media kind. Only
//! single-file submissions are classified; competition batches go to
//! the shared multi-item endpoint regardless of their media kinds, so
//! no per-file filtering happens there.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Media kinds the service accepts for single-file analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    Document,
}

impl MediaKind {
    /// Resolve a declared content type to a media kind.
    ///
    /// The three prefix rules are disjoint and `application/pdf`
    /// matches none of them, so at most one kind matches any input.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if content_type.starts_with("image/") {
            Some(Self::Image)
        } else if content_type.starts_with("audio/") {
            Some(Self::Audio)
        } else if content_type.starts_with("video/") {
            Some(Self::Video)
        } else if content_type == "application/pdf" {
            Some(Self::Document)
        } else {
            None
        }
    }

    /// Analysis route for this kind, relative to the service base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Image => "/analyze/image",
            Self::Audio => "/analyze/audio",
            Self::Video => "/analyze/video",
            Self::Document => "/analyze/document",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

/// Classify a content type, rejecting anything outside the four
/// supported kinds. The offending type is carried verbatim for display.
pub fn classify(content_type: &str) -> Result<MediaKind, AnalysisError> {
    MediaKind::from_content_type(content_type)
        .ok_or_else(|| AnalysisError::UnsupportedMedia(content_type.to_string()))
}

/// One file staged for submission: display name, declared content type
/// and the bytes shipped to the service. Identity within a batch is
/// positional.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SubmissionFile {
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Stage a file from disk, deriving the content type from the path.
    ///
    /// Unrecognized extensions fall back to `application/octet-stream`,
    /// which single-file classification then rejects.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AnalysisError::Validation(format!(
                "Não foi possível ler o arquivo {}: {}",
                path.display(),
                e
            ))
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self {
            name,
            content_type,
            bytes,
        })
    }

    /// Resolve this file's media kind (single-file mode only)
    pub fn classify(&self) -> Result<MediaKind, AnalysisError> {
        classify(&self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_recognized_types() {
        assert_eq!(classify("image/png").unwrap(), MediaKind::Image);
        assert_eq!(classify("image/jpeg").unwrap(), MediaKind::Image);
        assert_eq!(classify("audio/mpeg").unwrap(), MediaKind::Audio);
        assert_eq!(classify("video/mp4").unwrap(), MediaKind::Video);
        assert_eq!(classify("application/pdf").unwrap(), MediaKind::Document);
    }

    #[test]
    fn test_classify_rejects_everything_else() {
        for ct in ["text/plain", "application/json", "application/zip", ""] {
            let err = classify(ct).unwrap_err();
            assert_eq!(err, AnalysisError::UnsupportedMedia(ct.to_string()));
        }
    }

    #[test]
    fn test_only_exact_pdf_maps_to_document() {
        assert!(MediaKind::from_content_type("application/pdf+extra").is_none());
        assert!(MediaKind::from_content_type("application/x-pdf").is_none());
    }

    #[test]
    fn test_endpoint_per_kind() {
        assert_eq!(MediaKind::Image.endpoint(), "/analyze/image");
        assert_eq!(MediaKind::Audio.endpoint(), "/analyze/audio");
        assert_eq!(MediaKind::Video.endpoint(), "/analyze/video");
        assert_eq!(MediaKind::Document.endpoint(), "/analyze/document");
    }

    #[tokio::test]
    async fn test_from_path_derives_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foto.png");
        tokio::fs::write(&path, b"not a real png").await.unwrap();

        let file = SubmissionFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "foto.png");
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.classify().unwrap(), MediaKind::Image);
    }

    #[tokio::test]
    async fn test_from_path_unknown_extension_is_rejected_by_classify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dados.xyzabc");
        tokio::fs::write(&path, b"?").await.unwrap();

        let file = SubmissionFile::from_path(&path).await.unwrap();
        assert_eq!(file.content_type, "application/octet-stream");
        assert!(file.classify().is_err());
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_a_validation_error() {
        let err = SubmissionFile::from_path("/nonexistent/arquivo.png")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }
}
