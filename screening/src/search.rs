//! Candidate search controller.
//!
//! Filter edits are plain local-state updates. `search` posts the whole
//! filter object and renders whatever the backend returns, in the order it
//! returns it.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::backend::{ApiError, Backend};
use crate::models::{Candidate, ExperienceLevel, SearchFilters};
use crate::notice::{self, Notice, Notify};
use crate::store::Store;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub filters: SearchFilters,
    pub results: Vec<Candidate>,
    pub loading: bool,
    pub no_results: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    Empty,
    Failed(ApiError),
}

#[derive(Clone, Debug)]
pub struct SearchController<B, N, S> {
    backend: B,
    notices: N,
    state: S,
}

impl<B, N, S> SearchController<B, N, S>
where
    B: Backend,
    N: Notify,
    S: Store<SearchState>,
{
    pub fn new(backend: B, notices: N, state: S) -> Self {
        Self { backend, notices, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn toggle_skill(&self, skill: &str) {
        self.state.update(|s| s.filters.toggle_skill(skill));
    }

    pub fn remove_skill(&self, skill: &str) {
        self.state.update(|s| s.filters.remove_skill(skill));
    }

    pub fn set_custom_skill(&self, text: String) {
        self.state.update(|s| s.filters.custom_skill = text);
    }

    pub fn add_custom_skill(&self) -> bool {
        let mut added = false;
        self.state.update(|s| added = s.filters.add_custom_skill());
        added
    }

    pub fn set_min_experience(&self, level: Option<ExperienceLevel>) {
        self.state.update(|s| s.filters.min_experience = level);
    }

    pub fn set_education_level(&self, text: String) {
        self.state.update(|s| s.filters.education_level = text);
    }

    pub fn add_certification(&self, certification: &str) -> bool {
        let mut added = false;
        self.state.update(|s| added = s.filters.add_certification(certification));
        added
    }

    pub fn remove_certification(&self, certification: &str) {
        self.state.update(|s| s.filters.remove_certification(certification));
    }

    pub async fn search(&self) -> SearchOutcome {
        self.notices.notify(Notice::info(notice::SEARCHING));
        self.state.update(|s| {
            s.results.clear();
            s.no_results = false;
            s.loading = true;
        });
        let filters = self.state.with(|s| s.filters.clone());

        let result = self.backend.search(&filters).await;

        self.state.update(|s| s.loading = false);

        match result {
            Ok(response) if response.results.is_empty() => {
                self.state.update(|s| s.no_results = true);
                self.notices.notify(Notice::warning(notice::SEARCH_EMPTY));
                SearchOutcome::Empty
            }
            Ok(response) => {
                let count = response.results.len();
                self.state.update(|s| s.results = response.results);
                self.notices.notify(Notice::success(notice::SEARCH_FOUND));
                SearchOutcome::Found(count)
            }
            Err(error) => {
                log::error!("candidate search failed: {error}");
                self.notices.notify(Notice::error(notice::SEARCH_FAILED));
                SearchOutcome::Failed(error)
            }
        }
    }
}
