//! Remediation issue filing.
//!
//! When validation fails in CI, the missing-entry report is posted as an
//! issue so the gap gets tracked. Filing is best effort: callers log
//! failures and never change the exit status because of them.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::report::MissingReport;
use crate::config::IssueConfig;

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// Issue filing errors.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("repository `{0}` is not in `owner/repo` form")]
    InvalidRepo(String),

    #[error("failed to read token file `{0}`")]
    TokenFile(PathBuf, #[source] io::Error),

    #[error("invalid API URL `{0}`")]
    BaseUrl(String),

    #[error("invalid API URL")]
    Url(#[from] url::ParseError),

    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("API responded with {status}: {body}")]
    Status { status: u16, body: String },
}

/// Where to file, and with which credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct IssueTarget {
    pub owner: String,
    pub repo: String,
    token: String,
}

impl std::fmt::Debug for IssueTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueTarget")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl IssueTarget {
    /// Resolve the target from the process environment.
    ///
    /// `Ok(None)` means credentials are incomplete and nothing should be
    /// filed.
    pub fn from_env(config: &IssueConfig) -> Result<Option<Self>, IssueError> {
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    fn resolve(
        config: &IssueConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, IssueError> {
        let non_empty = |v: String| {
            let v = v.trim().to_string();
            (!v.is_empty()).then_some(v)
        };

        let Some(slug) = env(&config.repo_env).and_then(non_empty) else {
            return Ok(None);
        };

        let token = match env(&config.token_env).and_then(non_empty) {
            Some(token) => token,
            None => match &config.token_path {
                Some(path) if path.is_file() => {
                    let raw = fs::read_to_string(path)
                        .map_err(|err| IssueError::TokenFile(path.clone(), err))?;
                    match non_empty(raw) {
                        Some(token) => token,
                        None => return Ok(None),
                    }
                }
                _ => return Ok(None),
            },
        };

        let (owner, repo) = parse_repo(&slug)?;
        Ok(Some(Self { owner, repo, token }))
    }

    /// `{api}/repos/{owner}/{repo}/issues`
    pub fn endpoint(&self, api: &str) -> Result<Url, IssueError> {
        let mut url = Url::parse(api)?;
        url.path_segments_mut()
            .map_err(|_| IssueError::BaseUrl(api.to_string()))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str(), "issues"]);
        Ok(url)
    }
}

/// Split `owner/repo`.
fn parse_repo(slug: &str) -> Result<(String, String), IssueError> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(IssueError::InvalidRepo(slug.to_string())),
    }
}

/// JSON body of the create-issue request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl IssuePayload {
    pub fn new(report: &MissingReport<'_>, labels: &[String]) -> Self {
        Self {
            title: report.title(),
            body: report.markdown(),
            labels: labels.to_vec(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    html_url: String,
}

/// POST the issue and return its URL.
pub fn file_issue(
    config: &IssueConfig,
    target: &IssueTarget,
    payload: &IssuePayload,
) -> Result<String, IssueError> {
    let url = target.endpoint(&config.api)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()?;

    let response = client
        .post(url)
        .bearer_auth(&target.token)
        .header(ACCEPT, ACCEPT_GITHUB_V3)
        .header(USER_AGENT, concat!("taxon/", env!("CARGO_PKG_VERSION")))
        .json(payload)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(IssueError::Status {
            status: status.as_u16(),
            body: error_message(body),
        });
    }

    let created: CreatedIssue = response.json()?;
    Ok(created.html_url)
}

/// Pull `message` out of a JSON error body, or keep the raw text.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or(body)
}
