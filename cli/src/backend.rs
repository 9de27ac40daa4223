//! `reqwest` implementation of the backend gateway.
//!
//! Uploads stream the file in fixed-size chunks. Each chunk the transport
//! pulls is reported as a progress tick, so the terminal shows how much of
//! the body has actually been handed to the socket.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};
use screening::backend::{CANDIDATES_PATH, QUERY_PATH, SEARCH_PATH, UPLOAD_FIELD, UPLOAD_PATH};
use screening::{
    ApiConfig, ApiError, Backend, CandidateRef, QueryRequest, QueryResponse, ResumeFile, SearchFilters, SearchResponse,
    UploadProgress,
};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;

const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ReqwestBackend {
    client: Client,
    config: ApiConfig,
}

impl ReqwestBackend {
    /// Build a client carrying the configured default headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "skipping invalid default header"),
            }
        }
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Body stream over `bytes` that reports each chunk as it is pulled.
fn progress_body(bytes: Arc<[u8]>, ticks: mpsc::UnboundedSender<UploadProgress>) -> Body {
    let total = bytes.len();
    let chunks = (0..total).step_by(CHUNK_SIZE).map(move |start| {
        let end = (start + CHUNK_SIZE).min(total);
        let _ = ticks.send(UploadProgress { loaded: end as u64, total: total as u64 });
        Ok::<_, std::io::Error>(bytes[start..end].to_vec())
    });
    Body::wrap_stream(futures_util::stream::iter(chunks))
}

#[async_trait(?Send)]
impl Backend for ReqwestBackend {
    async fn list_candidates(&self) -> Result<Vec<CandidateRef>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(CANDIDATES_PATH))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn upload(&self, file: &ResumeFile, on_progress: &dyn Fn(UploadProgress)) -> Result<u16, ApiError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let part = Part::stream_with_length(progress_body(Arc::clone(&file.bytes), tx), file.size())
            .file_name(file.name.clone())
            .mime_str(file.content_type())
            .map_err(transport)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let request = self.client.post(self.config.endpoint(UPLOAD_PATH)).multipart(form).send();
        tokio::pin!(request);

        loop {
            tokio::select! {
                Some(tick) = rx.recv() => on_progress(tick),
                result = &mut request => {
                    while let Ok(tick) = rx.try_recv() {
                        on_progress(tick);
                    }
                    let response = result.map_err(transport)?;
                    return Ok(response.status().as_u16());
                }
            }
        }
    }

    async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint(SEARCH_PATH))
            .json(filters)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint(QUERY_PATH))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
