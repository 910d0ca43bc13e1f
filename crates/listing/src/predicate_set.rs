//! Per-domain bag of predicates, one per filter dimension.

use crate::filter_state::{Dimension, FilterValue};
use crate::traits::Predicate;
use std::collections::HashMap;

type TextPredicate<T> = Box<dyn Predicate<T, str>>;
type TagsPredicate<T> = Box<dyn Predicate<T, [String]>>;
type CustomPredicate<T> = Box<dyn Predicate<T, FilterValue>>;

/// The predicates a listing uses for its record type `T`.
///
/// Every slot is optional. A dimension without a predicate is not enforced,
/// even when the filter state has a value for it.
///
/// ## Usage
/// ```ignore
/// let predicates = PredicateSet::new()
///     .with_search(CourseSearch)
///     .with_category(CourseCategory)
///     .with_custom("min_rating", MinRating);
/// ```
pub struct PredicateSet<T> {
    search: Option<TextPredicate<T>>,
    category: Option<TextPredicate<T>>,
    level: Option<TextPredicate<T>>,
    tags: Option<TagsPredicate<T>>,
    custom: HashMap<String, CustomPredicate<T>>,
}

impl<T> PredicateSet<T> {
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            level: None,
            tags: None,
            custom: HashMap::new(),
        }
    }

    pub fn with_search(mut self, predicate: impl Predicate<T, str> + 'static) -> Self {
        self.search = Some(Box::new(predicate));
        self
    }

    pub fn with_category(mut self, predicate: impl Predicate<T, str> + 'static) -> Self {
        self.category = Some(Box::new(predicate));
        self
    }

    pub fn with_level(mut self, predicate: impl Predicate<T, str> + 'static) -> Self {
        self.level = Some(Box::new(predicate));
        self
    }

    pub fn with_tags(mut self, predicate: impl Predicate<T, [String]> + 'static) -> Self {
        self.tags = Some(Box::new(predicate));
        self
    }

    /// Register a custom filter under `key`. A later registration for the
    /// same key replaces the earlier one.
    pub fn with_custom(
        mut self,
        key: impl Into<String>,
        predicate: impl Predicate<T, FilterValue> + 'static,
    ) -> Self {
        self.custom.insert(key.into(), Box::new(predicate));
        self
    }

    pub(crate) fn search(&self) -> Option<&dyn Predicate<T, str>> {
        self.search.as_deref()
    }

    pub(crate) fn category(&self) -> Option<&dyn Predicate<T, str>> {
        self.category.as_deref()
    }

    pub(crate) fn level(&self) -> Option<&dyn Predicate<T, str>> {
        self.level.as_deref()
    }

    pub(crate) fn tags(&self) -> Option<&dyn Predicate<T, [String]>> {
        self.tags.as_deref()
    }

    pub(crate) fn custom(&self, key: &str) -> Option<&dyn Predicate<T, FilterValue>> {
        self.custom.get(key).map(|p| p.as_ref())
    }

    /// Whether a built-in dimension has a predicate
    pub fn handles(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Search => self.search.is_some(),
            Dimension::Category => self.category.is_some(),
            Dimension::Level => self.level.is_some(),
            Dimension::Tags => self.tags.is_some(),
        }
    }

    /// Whether a custom key has a predicate
    pub fn handles_custom(&self, key: &str) -> bool {
        self.custom.contains_key(key)
    }

    /// Registered custom keys, sorted
    pub fn custom_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<T> Default for PredicateSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
