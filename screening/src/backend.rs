//! HTTP contract with the CV analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four endpoints make up the whole integration surface:
//!
//! | Method | Path            | Body                         |
//! |--------|-----------------|------------------------------|
//! | GET    | `/candidates/`  | none                         |
//! | POST   | `/upload/`      | multipart, field `file`      |
//! | POST   | `/search/`      | JSON [`SearchFilters`]       |
//! | POST   | `/query/`       | JSON [`QueryRequest`]        |
//!
//! [`Backend`] abstracts the transport so the browser (`gloo-net` + XHR) and
//! the CLI (`reqwest`) share controller logic.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Candidate, CandidateRef, ResumeFile, SearchFilters};

pub const CANDIDATES_PATH: &str = "/candidates/";
pub const UPLOAD_PATH: &str = "/upload/";
pub const SEARCH_PATH: &str = "/search/";
pub const QUERY_PATH: &str = "/query/";

/// Multipart field name carrying the resume.
pub const UPLOAD_FIELD: &str = "file";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Transport or contract failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("backend is not reachable from this environment")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Base URL and default headers shared by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self {
            base_url,
            headers: vec![("Accept".to_owned(), "application/json".to_owned())],
        }
    }

    /// Absolute URL for an endpoint path such as [`SEARCH_PATH`].
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// One upload progress tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// `round(loaded / total * 100)` clamped to 100, or `None` when the total
    /// is unknown.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn percent(self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let ratio = (self.loaded as f64 * 100.0 / self.total as f64).round();
        Some(ratio.clamp(0.0, 100.0) as u8)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Candidate>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub resume_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Further questions answered in the same call, each keyed by its text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl QueryRequest {
    /// Every question asked, `query` first, in the order answers are shown.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.query.as_str())
            .filter(|q| !q.is_empty())
            .chain(self.queries.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub responses: HashMap<String, String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl QueryResponse {
    /// Answer keyed by the exact query string that was sent.
    #[must_use]
    pub fn answer_for(&self, query: &str) -> Option<&str> {
        self.responses.get(query).map(String::as_str).filter(|text| !text.is_empty())
    }
}

/// Request gateway to the backend.
///
/// Implementations map non-2xx statuses on JSON endpoints to
/// [`ApiError::Status`]. `upload` instead returns the raw status so the
/// caller can decide.
#[async_trait(?Send)]
pub trait Backend {
    async fn list_candidates(&self) -> Result<Vec<CandidateRef>, ApiError>;

    async fn upload(&self, file: &ResumeFile, on_progress: &dyn Fn(UploadProgress)) -> Result<u16, ApiError>;

    async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse, ApiError>;

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError>;
}

/// `true` for statuses in `[200, 300)`.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
