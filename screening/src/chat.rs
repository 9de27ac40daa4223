//! Candidate chat controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend answers with a map keyed by the query string it received, so
//! the reply is looked up by the exact text that was sent. Two identical
//! questions in flight at once cannot be told apart under that scheme.
//!
//! The transcript is append-only for the page lifetime. The synthetic
//! greeting is dropped the first time the user sends something.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::backend::{ApiError, Backend, QueryRequest};
use crate::models::CandidateRef;
use crate::notice::{self, Notice, Notify};
use crate::store::Store;

pub const GREETING: &str = "Hello! Select a candidate and ask your question.";
pub const NO_ANSWER: &str = "No response from AI.";

const TOO_MANY_REQUESTS: u16 = 429;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub is_initial: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User, is_initial: false }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, is_initial: false }
    }

    #[must_use]
    pub fn greeting() -> Self {
        Self { text: GREETING.to_owned(), sender: Sender::Bot, is_initial: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub candidates: Vec<CandidateRef>,
    pub candidates_requested: bool,
    pub selected: Option<String>,
    pub query: String,
    pub messages: Vec<ChatMessage>,
    /// Conversation id issued by the backend for the selected candidate.
    pub session_id: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            candidates_requested: false,
            selected: None,
            query: String::new(),
            messages: vec![ChatMessage::greeting()],
            session_id: None,
        }
    }
}

impl ChatState {
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        let id = self.selected.as_deref()?;
        self.candidates.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    NoCandidate,
    EmptyQuery,
    Answered,
    Failed(ApiError),
}

#[derive(Clone, Debug)]
pub struct ChatController<B, N, S> {
    backend: B,
    notices: N,
    state: S,
}

impl<B, N, S> ChatController<B, N, S>
where
    B: Backend,
    N: Notify,
    S: Store<ChatState>,
{
    pub fn new(backend: B, notices: N, state: S) -> Self {
        Self { backend, notices, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Load the candidate dropdown. Only the first call does any work.
    ///
    /// Failures are logged and leave the list empty; no notice is shown.
    pub async fn activate(&self) {
        if self.state.with(|s| s.candidates_requested) {
            return;
        }
        self.state.update(|s| s.candidates_requested = true);

        match self.backend.list_candidates().await {
            Ok(candidates) => self.state.update(|s| s.candidates = candidates),
            Err(error) => log::error!("error fetching candidates: {error}"),
        }
    }

    /// Select a candidate by id. An empty id clears the selection.
    pub fn select_candidate(&self, id: &str) {
        let id = id.trim();
        let next = (!id.is_empty()).then(|| id.to_owned());
        self.state.update(|s| {
            if s.selected != next {
                s.session_id = None;
            }
            s.selected = next;
        });
    }

    pub fn set_query(&self, text: String) {
        self.state.update(|s| s.query = text);
    }

    pub async fn send(&self) -> ChatOutcome {
        let (selected, query, session_id) =
            self.state.with(|s| (s.selected.clone(), s.query.clone(), s.session_id.clone()));

        let Some(resume_id) = selected else {
            self.notices.notify(Notice::error(notice::CANDIDATE_MISSING));
            return ChatOutcome::NoCandidate;
        };
        if query.trim().is_empty() {
            self.notices.notify(Notice::error(notice::QUESTION_MISSING));
            return ChatOutcome::EmptyQuery;
        }

        self.state.update(|s| {
            s.messages.retain(|m| !m.is_initial);
            s.messages.push(ChatMessage::user(query.clone()));
            s.query.clear();
        });

        self.dispatch(QueryRequest { resume_id, query, session_id, ..QueryRequest::default() }).await
    }

    /// Ask several questions in one request.
    ///
    /// Blank entries are skipped. Every remaining question is appended as a
    /// user turn, then each answer as a bot turn in the same order. The
    /// input buffer is left alone.
    pub async fn send_batch(&self, questions: &[String]) -> ChatOutcome {
        let (selected, session_id) = self.state.with(|s| (s.selected.clone(), s.session_id.clone()));

        let Some(resume_id) = selected else {
            self.notices.notify(Notice::error(notice::CANDIDATE_MISSING));
            return ChatOutcome::NoCandidate;
        };
        let queries: Vec<String> = questions.iter().filter(|q| !q.trim().is_empty()).cloned().collect();
        if queries.is_empty() {
            self.notices.notify(Notice::error(notice::QUESTION_MISSING));
            return ChatOutcome::EmptyQuery;
        }

        self.state.update(|s| {
            s.messages.retain(|m| !m.is_initial);
            s.messages.extend(queries.iter().cloned().map(ChatMessage::user));
        });

        self.dispatch(QueryRequest { resume_id, queries, session_id, ..QueryRequest::default() }).await
    }

    async fn dispatch(&self, request: QueryRequest) -> ChatOutcome {
        match self.backend.query(&request).await {
            Ok(response) => {
                let answers: Vec<ChatMessage> = request
                    .questions()
                    .map(|q| ChatMessage::bot(response.answer_for(q).unwrap_or(NO_ANSWER)))
                    .collect();
                self.state.update(|s| {
                    if let Some(session_id) = response.session_id {
                        if s.selected.as_deref() == Some(request.resume_id.as_str()) {
                            s.session_id = Some(session_id);
                        }
                    }
                    s.messages.extend(answers);
                });
                ChatOutcome::Answered
            }
            Err(error) => {
                log::error!("error querying AI: {error}");
                let text = if error.status() == Some(TOO_MANY_REQUESTS) {
                    notice::QUERY_RATE_LIMITED
                } else {
                    notice::QUERY_FAILED
                };
                self.notices.notify(Notice::error(text));
                ChatOutcome::Failed(error)
            }
        }
    }
}
