//! The filter engine: applies a [`FilterState`] to a list using a
//! [`PredicateSet`].
//!
//! Filtering is stable (survivors keep their relative order) and
//! deterministic, so applying the same state twice changes nothing.

use crate::filter_state::{Dimension, FilterState};
use crate::predicate_set::PredicateSet;

/// Decide whether one item survives the filter state.
///
/// ## Algorithm
/// Checks run in a fixed order and stop at the first failure:
/// 1. search term (if non-empty)
/// 2. category (if not `All`)
/// 3. level (if not `All`)
/// 4. tags (if non-empty)
/// 5. each custom filter key present in the state
///
/// A dimension without a registered predicate always passes.
pub fn item_passes<T>(item: &T, state: &FilterState, predicates: &PredicateSet<T>) -> bool {
    if state.is_active(Dimension::Search) {
        if let Some(search) = predicates.search() {
            if !search.matches(item, &state.search_term) {
                return false;
            }
        }
    }

    if let Some(category) = state.category.value() {
        if let Some(predicate) = predicates.category() {
            if !predicate.matches(item, category) {
                return false;
            }
        }
    }

    if let Some(level) = state.level.value() {
        if let Some(predicate) = predicates.level() {
            if !predicate.matches(item, level) {
                return false;
            }
        }
    }

    if state.is_active(Dimension::Tags) {
        if let Some(predicate) = predicates.tags() {
            if !predicate.matches(item, &state.tags) {
                return false;
            }
        }
    }

    state.custom.iter().all(|(key, value)| {
        predicates
            .custom(key)
            .is_none_or(|predicate| predicate.matches(item, value))
    })
}

/// Borrowed result of a filter pass: the surviving items plus counts.
#[derive(Debug)]
pub struct FilteredView<'a, T> {
    items: Vec<&'a T>,
    total_count: usize,
}

impl<'a, T> FilteredView<'a, T> {
    /// Surviving items, in input order
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    /// Number of items that passed the filters
    pub fn result_count(&self) -> usize {
        self.items.len()
    }

    /// Number of items before filtering
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<&'a T> {
        self.items
    }
}

impl<T: Clone> FilteredView<'_, T> {
    pub fn to_owned_items(&self) -> Vec<T> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Filter a borrowed slice.
pub fn apply_filters<'a, T>(
    items: &'a [T],
    state: &FilterState,
    predicates: &PredicateSet<T>,
) -> FilteredView<'a, T> {
    log_ignored_custom_keys(state, predicates);

    let kept: Vec<&T> = items
        .iter()
        .filter(|item| item_passes(*item, state, predicates))
        .collect();

    tracing::debug!(
        "Applied filters (input count: {}, output count: {})",
        items.len(),
        kept.len()
    );

    FilteredView {
        items: kept,
        total_count: items.len(),
    }
}

fn log_ignored_custom_keys<T>(state: &FilterState, predicates: &PredicateSet<T>) {
    let ignored: Vec<&str> = state
        .custom
        .keys()
        .map(String::as_str)
        .filter(|key| !predicates.handles_custom(key))
        .collect();
    if !ignored.is_empty() {
        tracing::debug!("No predicate registered for custom filters {:?}; not enforced", ignored);
    }
}

/// A filter engine bound to one record type's predicates.
///
/// ## Usage
/// ```ignore
/// let engine = FilterEngine::new(course_predicates());
/// let state = FilterState::new().with_search_term("rust");
///
/// let view = engine.view(catalog.courses(), &state);
/// println!("{} of {} courses", view.result_count(), view.total_count());
/// ```
pub struct FilterEngine<T> {
    predicates: PredicateSet<T>,
}

impl<T> FilterEngine<T> {
    pub fn new(predicates: PredicateSet<T>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &PredicateSet<T> {
        &self.predicates
    }

    /// Whether one item passes `state`
    pub fn matches(&self, item: &T, state: &FilterState) -> bool {
        item_passes(item, state, &self.predicates)
    }

    /// Filter a borrowed slice into a view with counts
    pub fn view<'a>(&self, items: &'a [T], state: &FilterState) -> FilteredView<'a, T> {
        apply_filters(items, state, &self.predicates)
    }

    /// Filter an owned list (takes ownership, returns the survivors)
    pub fn apply(&self, items: Vec<T>, state: &FilterState) -> Vec<T> {
        log_ignored_custom_keys(state, &self.predicates);

        let input_count = items.len();
        let kept: Vec<T> = items
            .into_iter()
            .filter(|item| item_passes(item, state, &self.predicates))
            .collect();

        tracing::debug!(
            "Applied filters (input count: {}, output count: {})",
            input_count,
            kept.len()
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::{FilterValue, Selection};
    use crate::traits::predicate_fn;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        kind: &'static str,
        size: u32,
        tags: Vec<&'static str>,
    }

    fn item(name: &'static str, kind: &'static str, size: u32, tags: &[&'static str]) -> Item {
        Item {
            name,
            kind,
            size,
            tags: tags.to_vec(),
        }
    }

    fn create_test_items() -> Vec<Item> {
        vec![
            item("apple", "fruit", 3, &["red", "sweet"]),
            item("carrot", "vegetable", 5, &["orange"]),
            item("banana", "fruit", 4, &["yellow", "sweet"]),
            item("beet", "vegetable", 2, &["red"]),
            item("cherry", "fruit", 1, &["red", "sweet"]),
        ]
    }

    fn create_test_predicates() -> PredicateSet<Item> {
        PredicateSet::new()
            .with_search(predicate_fn("name", |i: &Item, term: &str| i.name.contains(term)))
            .with_category(predicate_fn("kind", |i: &Item, kind: &str| i.kind == kind))
            .with_tags(predicate_fn("tags", |i: &Item, tags: &[String]| {
                tags.iter().any(|t| i.tags.iter().any(|own| *own == t.as_str()))
            }))
            .with_custom("max_size", predicate_fn("max_size", |i: &Item, v: &FilterValue| {
                v.as_number().is_none_or(|max| f64::from(i.size) <= max)
            }))
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_inactive_state_keeps_everything() {
        let engine = FilterEngine::new(create_test_predicates());
        let items = create_test_items();

        let filtered = engine.apply(items.clone(), &FilterState::new());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_single_dimension() {
        let engine = FilterEngine::new(create_test_predicates());

        let state = FilterState::new().with_category(Selection::only("fruit"));
        let filtered = engine.apply(create_test_items(), &state);
        assert_eq!(names(&filtered), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let engine = FilterEngine::new(create_test_predicates());

        let state = FilterState::new()
            .with_category(Selection::only("fruit"))
            .with_tags(["red"])
            .with_custom("max_size", FilterValue::Number(2.0));
        let filtered = engine.apply(create_test_items(), &state);
        assert_eq!(names(&filtered), vec!["cherry"]);
    }

    #[test]
    fn test_missing_predicate_is_not_enforced() {
        // No level predicate registered
        let engine = FilterEngine::new(create_test_predicates());
        let state = FilterState::new().with_level(Selection::only("anything"));
        assert_eq!(engine.apply(create_test_items(), &state).len(), 5);

        // Empty predicate set enforces nothing at all
        let engine = FilterEngine::new(PredicateSet::new());
        let state = FilterState::new()
            .with_search_term("zzz")
            .with_category(Selection::only("mineral"))
            .with_tags(["blue"]);
        assert_eq!(engine.apply(create_test_items(), &state).len(), 5);
    }

    #[test]
    fn test_unregistered_custom_key_is_ignored() {
        let engine = FilterEngine::new(create_test_predicates());
        let state = FilterState::new().with_custom("organic", FilterValue::Flag(true));
        assert_eq!(engine.apply(create_test_items(), &state).len(), 5);
    }

    #[test]
    fn test_sentinel_never_reaches_predicates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let predicates = PredicateSet::new().with_category(predicate_fn(
            "counting",
            move |_: &Item, _: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            },
        ));

        let engine = FilterEngine::new(predicates);
        let state = FilterState::new().with_category(Selection::parse("All Categories"));
        assert_eq!(engine.apply(create_test_items(), &state).len(), 5);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        let tag_calls = Arc::new(AtomicUsize::new(0));
        let counter = tag_calls.clone();
        let predicates = PredicateSet::new()
            .with_search(predicate_fn("name", |i: &Item, term: &str| i.name.contains(term)))
            .with_tags(predicate_fn("tags", move |_: &Item, _: &[String]| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }));

        let engine = FilterEngine::new(predicates);
        let state = FilterState::new().with_search_term("an").with_tags(["x"]);
        let filtered = engine.apply(create_test_items(), &state);

        // Only "banana" passes the search, so tags is consulted once
        assert_eq!(names(&filtered), vec!["banana"]);
        assert_eq!(tag_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_view_counts() {
        let engine = FilterEngine::new(create_test_predicates());
        let items = create_test_items();

        let state = FilterState::new().with_tags(["sweet"]);
        let view = engine.view(&items, &state);

        assert_eq!(view.result_count(), 3);
        assert_eq!(view.total_count(), 5);
        assert_eq!(
            view.iter().map(|i| i.name).collect::<Vec<_>>(),
            vec!["apple", "banana", "cherry"]
        );
        assert_eq!(view.to_owned_items().len(), 3);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let engine = FilterEngine::new(create_test_predicates());
        let items = create_test_items();

        let states = [
            FilterState::new(),
            FilterState::new().with_search_term("e"),
            FilterState::new().with_category(Selection::only("vegetable")),
            FilterState::new().with_tags(["red", "yellow"]),
            FilterState::new().with_custom("max_size", FilterValue::Number(3.0)),
            FilterState::new()
                .with_search_term("a")
                .with_tags(["sweet"])
                .with_custom("max_size", FilterValue::Number(4.0)),
        ];

        for state in &states {
            let filtered = engine.apply(items.clone(), state);
            // Walk the input once, matching survivors in order
            let mut remaining = items.iter();
            for kept in &filtered {
                assert!(
                    remaining.any(|candidate| candidate == kept),
                    "{:?} out of order for {:?}",
                    kept.name,
                    state
                );
            }
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let size_class = |size: u32| match size {
            0..=2 => "small",
            3..=4 => "medium",
            _ => "large",
        };
        let engine = FilterEngine::new(create_test_predicates().with_level(predicate_fn(
            "size_class",
            move |i: &Item, level: &str| size_class(i.size) == level,
        )));
        let terms = ["", "a", "e", "rr", "zzz"];
        let categories = [Selection::All, Selection::only("fruit"), Selection::only("vegetable")];
        let levels = [
            Selection::All,
            Selection::only("small"),
            Selection::only("medium"),
            Selection::only("large"),
        ];
        let tag_sets: [&[&str]; 3] = [&[], &["red"], &["sweet", "orange"]];
        let max_sizes = [None, Some(2.0), Some(4.0)];

        for term in terms {
            for category in &categories {
                for level in &levels {
                    for tags in tag_sets {
                        for max_size in max_sizes {
                            let mut state = FilterState::new()
                                .with_search_term(term)
                                .with_category(category.clone())
                                .with_level(level.clone())
                                .with_tags(tags.iter().copied());
                            if let Some(max) = max_size {
                                state = state.with_custom("max_size", FilterValue::Number(max));
                            }

                            let once = engine.apply(create_test_items(), &state);
                            let twice = engine.apply(once.clone(), &state);
                            assert_eq!(once, twice, "{state:?}");
                        }
                    }
                }
            }
        }
    }
}
