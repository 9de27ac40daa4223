//! User-facing notices and the sink controllers report them to.
//!
//! DESIGN
//! ======
//! Controllers never talk to a toast library directly. They emit a
//! [`Notice`] into whatever [`Notify`] implementation they were built with,
//! which keeps them testable without a UI.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::rc::Rc;

pub const FILE_READY: &str = "File ready for upload.";
pub const FILE_UNSUPPORTED: &str = "Unsupported file type. Please choose a PDF, DOC, or DOCX file.";
pub const FILE_MISSING: &str = "Please select a file first.";
pub const FILE_UNREADABLE: &str = "Could not read the selected file.";
pub const UPLOADING: &str = "Uploading file...";
pub const UPLOAD_SUCCEEDED: &str = "Upload successful!";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";

pub const SEARCHING: &str = "Searching for candidates...";
pub const SEARCH_EMPTY: &str = "No candidates found.";
pub const SEARCH_FOUND: &str = "Candidates found!";
pub const SEARCH_FAILED: &str = "Failed to fetch candidates. Please try again.";

pub const CANDIDATE_MISSING: &str = "Please select a candidate.";
pub const QUESTION_MISSING: &str = "Please enter a question.";
pub const QUERY_FAILED: &str = "Error processing query.";
pub const QUERY_RATE_LIMITED: &str = "Too many questions. Please wait a minute and try again.";

/// Severity of a notice; drives toast color and CLI prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A transient, non-blocking message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self { level, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

/// Sink for notices.
pub trait Notify {
    fn notify(&self, notice: Notice);
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<N: Notify + ?Sized> Notify for Rc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}
