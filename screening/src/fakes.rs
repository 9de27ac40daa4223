//! Scripted backend and recording notifier for controller tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::backend::{ApiError, Backend, QueryRequest, QueryResponse, SearchResponse, UploadProgress};
use crate::models::{CandidateRef, ResumeFile, SearchFilters};
use crate::notice::{Notice, NoticeLevel, Notify};

#[derive(Default)]
struct Script {
    candidates: Option<Result<Vec<CandidateRef>, ApiError>>,
    upload: Option<Result<u16, ApiError>>,
    progress: Vec<UploadProgress>,
    search: Option<Result<SearchResponse, ApiError>>,
    query: Option<Result<QueryResponse, ApiError>>,
    during: Option<Box<dyn Fn()>>,
}

#[derive(Default)]
struct Calls {
    candidates: Cell<usize>,
    uploads: RefCell<Vec<String>>,
    searches: RefCell<Vec<SearchFilters>>,
    queries: RefCell<Vec<QueryRequest>>,
}

/// Backend whose responses are configured up front. Unscripted calls fail
/// with [`ApiError::Unavailable`].
#[derive(Clone, Default)]
pub struct FakeBackend {
    script: Rc<RefCell<Script>>,
    calls: Rc<Calls>,
}

impl FakeBackend {
    pub fn with_candidates(self, result: Result<Vec<CandidateRef>, ApiError>) -> Self {
        self.script.borrow_mut().candidates = Some(result);
        self
    }

    pub fn with_upload(self, result: Result<u16, ApiError>, progress: Vec<UploadProgress>) -> Self {
        {
            let mut script = self.script.borrow_mut();
            script.upload = Some(result);
            script.progress = progress;
        }
        self
    }

    pub fn with_search(self, result: Result<SearchResponse, ApiError>) -> Self {
        self.script.borrow_mut().search = Some(result);
        self
    }

    pub fn with_query(self, result: Result<QueryResponse, ApiError>) -> Self {
        self.script.borrow_mut().query = Some(result);
        self
    }

    /// Run `hook` while a request is "in flight", before it resolves.
    pub fn during(self, hook: impl Fn() + 'static) -> Self {
        self.script.borrow_mut().during = Some(Box::new(hook));
        self
    }

    pub fn candidate_calls(&self) -> usize {
        self.calls.candidates.get()
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.calls.uploads.borrow().clone()
    }

    pub fn searches(&self) -> Vec<SearchFilters> {
        self.calls.searches.borrow().clone()
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.calls.queries.borrow().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.candidate_calls() + self.uploaded().len() + self.searches().len() + self.queries().len()
    }

    fn in_flight(&self) {
        if let Some(hook) = self.script.borrow().during.as_ref() {
            hook();
        }
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn list_candidates(&self) -> Result<Vec<CandidateRef>, ApiError> {
        self.calls.candidates.set(self.calls.candidates.get() + 1);
        self.in_flight();
        self.script.borrow().candidates.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn upload(&self, file: &ResumeFile, on_progress: &dyn Fn(UploadProgress)) -> Result<u16, ApiError> {
        self.calls.uploads.borrow_mut().push(file.name.clone());
        let progress = self.script.borrow().progress.clone();
        for tick in progress {
            on_progress(tick);
        }
        self.in_flight();
        self.script.borrow().upload.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse, ApiError> {
        self.calls.searches.borrow_mut().push(filters.clone());
        self.in_flight();
        self.script.borrow().search.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        self.calls.queries.borrow_mut().push(request.clone());
        self.in_flight();
        self.script.borrow().query.clone().unwrap_or(Err(ApiError::Unavailable))
    }
}

/// Notifier that remembers everything it was told.
#[derive(Clone, Default)]
pub struct RecordingNotifier(Rc<RefCell<Vec<Notice>>>);

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.0.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.0.borrow().iter().map(|n| n.text.clone()).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.0.borrow().last().cloned()
    }

    pub fn count(&self, level: NoticeLevel) -> usize {
        self.0.borrow().iter().filter(|n| n.level == level).count()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}
