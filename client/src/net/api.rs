//! Browser HTTP backend for the CV analysis API.
//!
//! Client-side (hydrate): JSON calls via `gloo-net`, and uploads via
//! `XMLHttpRequest` because `fetch` exposes no upload progress.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies map to the
//! matching `ApiError` variant. Controllers decide what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use leptos::prelude::use_context;
use screening::backend::ApiConfig;
use screening::{ApiError, Backend, CandidateRef, QueryRequest, QueryResponse, ResumeFile, SearchFilters, SearchResponse, UploadProgress};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

/// Name of the shell `<meta>` tag carrying the backend base URL.
pub const BASE_URL_META: &str = "cv-api-base";

/// API configuration for the current render.
///
/// In the browser the server-rendered meta tag wins. On the server the
/// context provided by the host is used. Both fall back to the default
/// local backend.
pub fn resolve_config() -> ApiConfig {
    #[cfg(feature = "hydrate")]
    {
        if let Some(base) = read_base_url_meta() {
            return ApiConfig::new(base);
        }
    }
    use_context::<ApiConfig>().unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn read_base_url_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{BASE_URL_META}\"]"))
        .ok()??;
    non_empty(&element.get_attribute("content")?)
}

#[cfg(any(test, feature = "hydrate"))]
fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if screening::backend::is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `Backend` implementation for the browser.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use futures::StreamExt;
    use futures::channel::mpsc;
    use gloo_net::http::{Method, Request, RequestBuilder};
    use screening::backend::{UPLOAD_FIELD, UPLOAD_PATH};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::*;

    enum XhrEvent {
        Progress(UploadProgress),
        Done(u16),
        Failed(&'static str),
    }

    pub(super) fn transport(error: gloo_net::Error) -> ApiError {
        ApiError::Transport(error.to_string())
    }

    fn js_error(error: wasm_bindgen::JsValue) -> ApiError {
        ApiError::Transport(format!("{error:?}"))
    }

    impl HttpBackend {
        pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
            let mut builder = RequestBuilder::new(&self.config.endpoint(path)).method(method);
            for (name, value) in &self.config.headers {
                builder = builder.header(name, value);
            }
            builder
        }

        pub(super) async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
            let response = request.send().await.map_err(transport)?;
            check_status(response.status())?;
            let body = response.text().await.map_err(transport)?;
            decode(&body)
        }

        /// Multipart POST through XHR, forwarding upload progress ticks.
        ///
        /// The XHR callbacks are `'static`, so they push into a channel that
        /// this future drains, calling `on_progress` from here.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        pub(super) async fn send_form(
            &self,
            file: &ResumeFile,
            on_progress: &dyn Fn(UploadProgress),
        ) -> Result<u16, ApiError> {
            let form = form_data(file)?;
            let xhr = web_sys::XmlHttpRequest::new().map_err(js_error)?;
            xhr.open_with_async("POST", &self.config.endpoint(UPLOAD_PATH), true)
                .map_err(js_error)?;
            for (name, value) in &self.config.headers {
                xhr.set_request_header(name, value).map_err(js_error)?;
            }

            let (tx, mut rx) = mpsc::unbounded::<XhrEvent>();

            let progress_tx = tx.clone();
            let on_tick = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |ev: web_sys::ProgressEvent| {
                if ev.length_computable() {
                    let tick = UploadProgress { loaded: ev.loaded() as u64, total: ev.total() as u64 };
                    let _ = progress_tx.unbounded_send(XhrEvent::Progress(tick));
                }
            });
            let load_tx = tx.clone();
            let load_xhr = xhr.clone();
            let on_load = Closure::<dyn FnMut()>::new(move || {
                let status = load_xhr.status().unwrap_or(0);
                let _ = load_tx.unbounded_send(XhrEvent::Done(status));
            });
            let error_tx = tx.clone();
            let on_error = Closure::<dyn FnMut()>::new(move || {
                let _ = error_tx.unbounded_send(XhrEvent::Failed("network error during upload"));
            });
            let abort_tx = tx;
            let on_abort = Closure::<dyn FnMut()>::new(move || {
                let _ = abort_tx.unbounded_send(XhrEvent::Failed("upload aborted"));
            });

            let upload = xhr.upload().map_err(js_error)?;
            // Declared after the closures so it drops first.
            let mut guard = XhrGuard { xhr: xhr.clone(), upload: upload.clone(), settled: false };
            upload.set_onprogress(Some(on_tick.as_ref().unchecked_ref()));
            xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
            xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));

            xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;

            let result = loop {
                match rx.next().await {
                    Some(XhrEvent::Progress(tick)) => on_progress(tick),
                    Some(XhrEvent::Done(status)) => break Ok(status),
                    Some(XhrEvent::Failed(reason)) => break Err(ApiError::Transport(reason.to_owned())),
                    None => break Err(ApiError::Transport("upload channel closed".to_owned())),
                }
            };

            guard.settled = true;
            result
        }
    }

    /// Detaches the XHR handlers before their closures drop.
    ///
    /// If the upload future is dropped mid-flight (the page unmounted), the
    /// request is aborted too, so no later event reaches a freed closure.
    struct XhrGuard {
        xhr: web_sys::XmlHttpRequest,
        upload: web_sys::XmlHttpRequestUpload,
        settled: bool,
    }

    impl Drop for XhrGuard {
        fn drop(&mut self) {
            self.upload.set_onprogress(None);
            self.xhr.set_onload(None);
            self.xhr.set_onerror(None);
            self.xhr.set_onabort(None);
            if !self.settled {
                log::debug!("upload dropped before completion; aborting request");
                let _ = self.xhr.abort();
            }
        }
    }

    fn form_data(file: &ResumeFile) -> Result<web_sys::FormData, ApiError> {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_ref());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(file.content_type());
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)
            .map_err(js_error)?;
        Ok(form)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list_candidates(&self) -> Result<Vec<CandidateRef>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use screening::backend::CANDIDATES_PATH;
            let request = self
                .request(gloo_net::http::Method::GET, CANDIDATES_PATH)
                .build()
                .map_err(browser::transport)?;
            self.fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn upload(&self, file: &ResumeFile, on_progress: &dyn Fn(UploadProgress)) -> Result<u16, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_form(file, on_progress).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file, on_progress);
            Err(ApiError::Unavailable)
        }
    }

    async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use screening::backend::SEARCH_PATH;
            let request = self
                .request(gloo_net::http::Method::POST, SEARCH_PATH)
                .json(filters)
                .map_err(browser::transport)?;
            self.fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filters;
            Err(ApiError::Unavailable)
        }
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use screening::backend::QUERY_PATH;
            let request = self
                .request(gloo_net::http::Method::POST, QUERY_PATH)
                .json(request)
                .map_err(browser::transport)?;
            self.fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
