//! Bridges contact-form submissions to the GitHub Issues API.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, instrument};

const GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_LABEL: &str = "contact-form";

/// Incoming contact-form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub title: String,
    pub body: String,
    pub labels: Option<Vec<String>>,
}

/// The created issue, echoed back to the submitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCreated {
    pub issue_url: String,
    pub issue_number: u64,
}

#[derive(Debug, Deserialize)]
struct GithubIssueResponse {
    html_url: String,
    number: u64,
}

#[derive(Debug)]
pub struct ContactBridge {
    client: reqwest::Client,
    token: String,
    repo: String,
    api_base: String,
}

impl ContactBridge {
    /// Builds a bridge from deployment secrets: `GITHUB_TOKEN` and
    /// `GITHUB_REPO` (formatted `owner/repo`). Missing either is a
    /// configuration error; no outbound call is attempted in that case.
    pub fn from_env(timeout_seconds: u64) -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| CatalogError::Config("GITHUB_TOKEN is not set".to_string()))?;
        let repo = std::env::var("GITHUB_REPO")
            .map_err(|_| CatalogError::Config("GITHUB_REPO is not set".to_string()))?;
        Self::new(token, repo, timeout_seconds)
    }

    pub fn new(token: String, repo: String, timeout_seconds: u64) -> Result<Self> {
        if token.is_empty() || repo.is_empty() {
            return Err(CatalogError::Config(
                "issue tracker token and repo must be configured".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            token,
            repo,
            api_base: GITHUB_API_BASE.to_string(),
        })
    }

    /// Points the bridge at a different API origin. Used by tests to stand
    /// up a fake upstream.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Creates one issue per submission. A single transient failure is
    /// surfaced directly; there is no retry.
    #[instrument(skip(self, submission), fields(repo = %self.repo))]
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<IssueCreated> {
        let labels = submission
            .labels
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_LABEL.to_string()]);

        let url = format!("{}/repos/{}/issues", self.api_base, self.repo);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "alt-catalog-contact")
            .json(&serde_json::json!({
                "title": submission.title,
                "body": submission.body,
                "labels": labels,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Upstream detail stays in the log; callers get a generic error.
            let detail = response.text().await.unwrap_or_default();
            error!(%status, %detail, "issue tracker rejected submission");
            return Err(CatalogError::Api {
                message: "failed to create issue".to_string(),
            });
        }

        let body = response.text().await?;
        let issue: GithubIssueResponse = serde_json::from_str(&body)?;
        info!(number = issue.number, "created issue");
        Ok(IssueCreated {
            issue_url: issue.html_url,
            issue_number: issue.number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_a_config_error() {
        let err = ContactBridge::new(String::new(), "owner/repo".to_string(), 10).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));

        let err = ContactBridge::new("token".to_string(), String::new(), 10).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn api_base_is_overridable() {
        let bridge = ContactBridge::new("token".to_string(), "owner/repo".to_string(), 10)
            .unwrap()
            .with_api_base("http://127.0.0.1:9");
        assert_eq!(bridge.api_base, "http://127.0.0.1:9");
    }
}
