//! Core traits for the filter engine.
//!
//! A [`Predicate`] decides whether one item satisfies one filter criterion.
//! The engine never looks inside items; everything domain-specific lives in
//! the predicates a caller registers in a [`PredicateSet`](crate::PredicateSet).

/// Matching function for a single filter dimension.
///
/// `T` is the record type being listed, `C` the criterion for the dimension
/// (`str` for search/category/level, `[String]` for tags,
/// [`FilterValue`](crate::FilterValue) for custom filters).
///
/// ## Design Note
/// - `Send + Sync` so a predicate set can be shared behind `Arc` by several views
/// - Predicates must be pure: same item and criterion, same answer
pub trait Predicate<T, C: ?Sized>: Send + Sync {
    /// Returns the name of this predicate (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `item` satisfies `criterion`
    fn matches(&self, item: &T, criterion: &C) -> bool;
}

/// Adapter turning a closure into a named [`Predicate`].
pub struct FnPredicate<F> {
    name: String,
    f: F,
}

impl<T, C, F> Predicate<T, C> for FnPredicate<F>
where
    C: ?Sized,
    F: Fn(&T, &C) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, item: &T, criterion: &C) -> bool {
        (self.f)(item, criterion)
    }
}

/// Wrap a closure as a predicate.
///
/// ```ignore
/// let by_title = predicate_fn("title", |course: &Course, term: &str| {
///     course.title.to_lowercase().contains(&term.to_lowercase())
/// });
/// ```
pub fn predicate_fn<T, C, F>(name: impl Into<String>, f: F) -> FnPredicate<F>
where
    C: ?Sized,
    F: Fn(&T, &C) -> bool + Send + Sync,
{
    FnPredicate {
        name: name.into(),
        f,
    }
}
