//! Stateful filter selection owned by one listing view.
//!
//! A view starts from its initial overrides (e.g. a category page opens with
//! its category preselected), lets the user change filters, and can reset
//! back to where it started.

use crate::filter_state::{FilterState, FilterValue, Selection};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSession {
    initial: FilterState,
    current: FilterState,
}

impl FilterSession {
    /// Start a session from the default (unconstrained) state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session whose defaults are overridden by `initial`.
    /// Custom filters in `initial` are ignored: reset always clears them.
    pub fn with_initial(initial: FilterState) -> Self {
        let initial = FilterState {
            custom: Default::default(),
            ..initial
        };
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.current
    }

    pub fn initial(&self) -> &FilterState {
        &self.initial
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.current.search_term = term.into();
    }

    pub fn set_category(&mut self, category: Selection) {
        self.current.category = category;
    }

    pub fn set_level(&mut self, level: Selection) {
        self.current.level = level;
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.current.tags = tags.into_iter().map(Into::into).collect();
    }

    /// Set a custom filter; `None` removes the key (no constraint)
    pub fn set_custom_filter(&mut self, key: impl Into<String>, value: Option<FilterValue>) {
        let key = key.into();
        match value {
            Some(value) => {
                self.current.custom.insert(key, value);
            }
            None => {
                self.current.custom.remove(&key);
            }
        }
    }

    pub fn clear_custom_filter(&mut self, key: &str) {
        self.current.custom.remove(key);
    }

    pub fn has_active_filters(&self) -> bool {
        self.current.has_active_filters()
    }

    /// Restore search term, category, level and tags to the initial
    /// overrides and drop every custom filter.
    pub fn reset_filters(&mut self) {
        self.current = self.initial.clone();
        tracing::debug!("Filters reset");
    }
}
