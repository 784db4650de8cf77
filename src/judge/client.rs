//! Analysis service client.
//!
//! Resolves the endpoint for a submission, ships the multipart form and
//! interprets the reply. Single-file submissions are classified to a
//! per-kind endpoint before any network activity; competition
//! submissions always go to the shared multi-item endpoint, whatever
//! the files' media kinds.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AnalysisError, CONNECTION_ERROR};
use crate::judge::http::analysis_client;
use crate::judge::normalize::{normalize_competition, normalize_single};
use crate::judge::ranking::rank;
use crate::judge::request::{competition_form, single_form};
use crate::judge::types::{CompetitionPayload, CompetitionReport, ServiceReply, Verdict};
use crate::media::SubmissionFile;

/// Default service address, matching a locally run back-end
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Route for competition submissions; media kinds are not filtered here
pub const COMPETITION_ENDPOINT: &str = "/analyze/multiple";

/// Connection settings for the analysis service
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Service base URL, without a trailing slash
    pub base_url: String,
    /// Per-request timeout; analysis calls are slow
    pub timeout: Duration,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl JudgeConfig {
    /// Build a config from the environment.
    ///
    /// `JURADO_API_URL` overrides the base URL; [`crate::init_logging`]
    /// loads `.env` beforehand.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("JURADO_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        config
    }
}

/// The analysis operations the submission controller drives
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// Classify and analyze one file
    async fn analyze_single(
        &self,
        file: &SubmissionFile,
        criteria: &str,
    ) -> Result<Verdict, AnalysisError>;

    /// Analyze a batch comparatively and rank it
    async fn analyze_competition(
        &self,
        files: &[SubmissionFile],
        criteria: &str,
    ) -> Result<CompetitionReport, AnalysisError>;
}

/// HTTP client for the analysis service
pub struct JudgeClient {
    config: JudgeConfig,
}

impl JudgeClient {
    pub fn new(config: JudgeConfig) -> Self {
        Self { config }
    }

    /// Client configured from the environment
    pub fn from_env() -> Self {
        Self::new(JudgeConfig::from_env())
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ServiceReply<T>, AnalysisError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        tracing::debug!("[Judge] POST {}", url);

        let response = analysis_client()
            .post(&url)
            .multipart(form)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("[Judge] request to {} failed: {}", endpoint, e);
                AnalysisError::Transport(CONNECTION_ERROR.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // Rejections carry a `detail` field; surface it preferentially
            let detail = response
                .json::<RejectionBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            tracing::warn!("[Judge] {} replied {}", endpoint, status);
            return Err(AnalysisError::Transport(
                detail.unwrap_or_else(|| CONNECTION_ERROR.to_string()),
            ));
        }

        response.json::<ServiceReply<T>>().await.map_err(|e| {
            tracing::warn!("[Judge] unreadable reply from {}: {}", endpoint, e);
            AnalysisError::Transport(CONNECTION_ERROR.to_string())
        })
    }
}

/// Error body the service attaches to non-2xx replies
#[derive(Deserialize)]
struct RejectionBody {
    #[serde(default)]
    detail: Option<String>,
}

#[async_trait]
impl JudgeApi for JudgeClient {
    async fn analyze_single(
        &self,
        file: &SubmissionFile,
        criteria: &str,
    ) -> Result<Verdict, AnalysisError> {
        // Classification happens before any network activity
        let kind = file.classify()?;
        tracing::info!("[Judge] analyzing {} as {}", file.name, kind.as_str());

        let form = single_form(file, criteria)?;
        let reply = self.post::<Verdict>(kind.endpoint(), form).await?;
        normalize_single(reply)
    }

    async fn analyze_competition(
        &self,
        files: &[SubmissionFile],
        criteria: &str,
    ) -> Result<CompetitionReport, AnalysisError> {
        tracing::info!("[Judge] analyzing {} items comparatively", files.len());

        let form = competition_form(files, criteria)?;
        let reply = self
            .post::<CompetitionPayload>(COMPETITION_ENDPOINT, form)
            .await?;
        let payload = normalize_competition(reply)?;
        Ok(rank(payload))
    }
}
