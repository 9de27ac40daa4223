//! Resume upload controller.
//!
//! One file may be staged at a time. `upload` always leaves `is_uploading`
//! false when it returns, whichever way the request ended, and keeps the
//! staged file on failure so the user can retry.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::backend::{ApiError, Backend, UploadProgress, is_success};
use crate::models::ResumeFile;
use crate::notice::{self, Notice, Notify};
use crate::store::Store;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected_file: Option<ResumeFile>,
    /// Percent complete, 0 to 100.
    pub progress: u8,
    pub is_uploading: bool,
}

impl UploadState {
    fn record_progress(&mut self, percent: u8) {
        self.progress = self.progress.max(percent.min(100));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    NoFileSelected,
    Uploaded { status: u16 },
    Rejected { status: u16 },
    Failed(ApiError),
}

impl UploadOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }
}

#[derive(Clone, Debug)]
pub struct UploadController<B, N, S> {
    backend: B,
    notices: N,
    state: S,
}

impl<B, N, S> UploadController<B, N, S>
where
    B: Backend,
    N: Notify,
    S: Store<UploadState>,
{
    pub fn new(backend: B, notices: N, state: S) -> Self {
        Self { backend, notices, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Stage `file`, replacing any previous selection.
    ///
    /// Returns `false` for unsupported file types, leaving the previous
    /// selection in place.
    pub fn select_file(&self, file: ResumeFile) -> bool {
        if !file.is_supported() {
            self.notices.notify(Notice::error(notice::FILE_UNSUPPORTED));
            return false;
        }
        self.state.update(|s| {
            s.selected_file = Some(file);
            s.progress = 0;
        });
        self.notices.notify(Notice::info(notice::FILE_READY));
        true
    }

    pub async fn upload(&self) -> UploadOutcome {
        let Some(file) = self.state.with(|s| s.selected_file.clone()) else {
            self.notices.notify(Notice::error(notice::FILE_MISSING));
            return UploadOutcome::NoFileSelected;
        };

        self.state.update(|s| {
            s.is_uploading = true;
            s.progress = 0;
        });
        self.notices.notify(Notice::info(notice::UPLOADING));

        let on_progress = |tick: UploadProgress| {
            if let Some(percent) = tick.percent() {
                self.state.update(|s| s.record_progress(percent));
            }
        };
        let result = self.backend.upload(&file, &on_progress).await;

        self.state.update(|s| s.is_uploading = false);

        match result {
            Ok(status) if is_success(status) => {
                self.state.update(|s| {
                    s.selected_file = None;
                    s.progress = 0;
                });
                self.notices.notify(Notice::success(notice::UPLOAD_SUCCEEDED));
                UploadOutcome::Uploaded { status }
            }
            Ok(status) => {
                log::warn!("upload of {} rejected with status {status}", file.name);
                self.notices.notify(Notice::error(notice::UPLOAD_FAILED));
                UploadOutcome::Rejected { status }
            }
            Err(error) => {
                log::error!("upload of {} failed: {error}", file.name);
                self.notices.notify(Notice::error(notice::UPLOAD_FAILED));
                UploadOutcome::Failed(error)
            }
        }
    }
}
