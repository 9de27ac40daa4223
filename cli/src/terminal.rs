//! Terminal renderings of notices, upload progress and candidates.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use screening::{Candidate, ChatState, LocalStore, Notice, NoticeLevel, Notify, Sender, Store, UploadState};

const BAR_WIDTH: usize = 30;

/// `[level] text`, with the level padded so texts line up.
pub fn format_notice(notice: &Notice) -> String {
    format!("[{:<7}] {}", notice.level.as_str(), notice.text)
}

/// Notices go to stderr so stdout stays pipeable.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notify for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        if notice.level == NoticeLevel::Error {
            tracing::debug!(text = %notice.text, "error notice");
        }
        eprintln!("{}", format_notice(&notice));
    }
}

pub fn render_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("[{}{}] {percent:>3}%", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Terminal output for a move from `before` to `after`, and whether a bar
/// line is still open afterwards.
///
/// A bar left short of 100% is closed when the upload stops, so the next
/// notice starts on its own line.
fn bar_transition(before: &UploadState, after: &UploadState, open: bool) -> (String, bool) {
    let mut out = String::new();
    let mut open = open;
    if after.progress != before.progress && after.progress > 0 {
        out.push('\r');
        out.push_str(&render_bar(after.progress));
        open = after.progress < 100;
        if !open {
            out.push('\n');
        }
    }
    if open && before.is_uploading && !after.is_uploading {
        out.push('\n');
        open = false;
    }
    (out, open)
}

/// Upload state that redraws a progress bar on stderr whenever the
/// percentage moves.
#[derive(Clone, Debug, Default)]
pub struct ProgressStore {
    inner: LocalStore<UploadState>,
    bar_open: Rc<Cell<bool>>,
}

impl Store<UploadState> for ProgressStore {
    fn with<R>(&self, f: impl FnOnce(&UploadState) -> R) -> R {
        self.inner.with(f)
    }

    fn update(&self, f: impl FnOnce(&mut UploadState)) {
        let before = self.inner.snapshot();
        self.inner.update(f);
        let (out, open) = self.inner.with(|after| bar_transition(&before, after, self.bar_open.get()));
        self.bar_open.set(open);
        if !out.is_empty() {
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "{out}");
            let _ = stderr.flush();
        }
    }
}

/// Multi-line block for one search result.
pub fn render_candidate(candidate: &Candidate) -> String {
    format!(
        "{}\n  Experience: {}\n  Skills: {}\n  Education: {}\n  Certifications: {}",
        candidate.display_name(),
        candidate.experience_line(),
        candidate.skills_line(),
        candidate.education_line(),
        candidate.certifications_line(),
    )
}

/// Texts of the last `count` bot turns, oldest first.
pub fn latest_replies(state: &ChatState, count: usize) -> Vec<String> {
    let mut replies: Vec<String> = state
        .messages
        .iter()
        .rev()
        .filter(|m| m.sender == Sender::Bot && !m.is_initial)
        .take(count)
        .map(|m| m.text.clone())
        .collect();
    replies.reverse();
    replies
}

pub fn render_exchange(question: &str, answer: &str) -> String {
    format!("> {question}\n{answer}")
}
