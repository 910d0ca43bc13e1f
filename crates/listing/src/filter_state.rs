//! The value describing which filters are active.
//!
//! `FilterState` is a plain value: the engine reads it, callers replace it.
//! "No constraint" is spelled out in the types instead of with magic strings:
//! an empty search term, [`Selection::All`], an empty tag list, or a custom
//! key that isn't in the map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Display text for an unconstrained category selector
pub const ALL_CATEGORIES: &str = "All Categories";

/// Display text for an unconstrained level selector
pub const ALL_LEVELS: &str = "All Levels";

/// The built-in filter dimensions, in the order the engine checks them.
/// Anything else goes through the custom filter map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Search,
    Category,
    Level,
    Tags,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Search,
        Dimension::Category,
        Dimension::Level,
        Dimension::Tags,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Search => "search",
            Dimension::Category => "category",
            Dimension::Level => "level",
            Dimension::Tags => "tags",
        }
    }
}

/// A single-choice selector that can also mean "everything".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse selector text. Empty input and the "all" labels
    /// (`All`, `All Categories`, `All Levels`, any case) select everything.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES)
            || trimmed.eq_ignore_ascii_case(ALL_LEVELS)
        {
            Selection::All
        } else {
            Selection::Only(trimmed.to_string())
        }
    }

    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The selected domain value, `None` for [`Selection::All`]
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(value) => f.write_str(value),
        }
    }
}

/// Value of a custom filter: a scalar or a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Flag(bool),
    List(Vec<String>),
    Range { min: f64, max: f64 },
}

impl FilterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FilterValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// The active filter selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search_term: String,
    pub category: Selection,
    pub level: Selection,
    pub tags: Vec<String>,
    pub custom: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: Selection) -> Self {
        self.category = category;
        self
    }

    pub fn with_level(mut self, level: Selection) -> Self {
        self.level = level;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.custom.insert(key.into(), value);
        self
    }

    /// Whether a built-in dimension currently constrains the listing
    pub fn is_active(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Search => !self.search_term.is_empty(),
            Dimension::Category => !self.category.is_all(),
            Dimension::Level => !self.level.is_all(),
            Dimension::Tags => !self.tags.is_empty(),
        }
    }

    /// True iff any dimension (built-in or custom) constrains the listing.
    /// Views use this to show or hide their "reset filters" control.
    pub fn has_active_filters(&self) -> bool {
        Dimension::ALL.iter().any(|d| self.is_active(*d)) || !self.custom.is_empty()
    }
}
