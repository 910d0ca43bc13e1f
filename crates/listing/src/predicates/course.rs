//! Predicates for the course catalog.

use crate::filter_state::FilterValue;
use crate::predicate_set::PredicateSet;
use crate::traits::Predicate;
use catalog::{Course, CourseLevel};

/// Custom filter key: `Range { min, max }`, or `Number(max)` as an upper bound
pub const PRICE_RANGE: &str = "price_range";
/// Custom filter key: `Number(min)` average rating
pub const MIN_RATING: &str = "min_rating";
/// Custom filter key: `Flag(true)` keeps only free courses
pub const FREE_ONLY: &str = "free_only";
/// Custom filter key: `Number(max)` total runtime in minutes
pub const MAX_DURATION: &str = "max_duration";

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring search over title, description, instructor
/// and tags.
pub struct CourseSearch;

impl Predicate<Course, str> for CourseSearch {
    fn name(&self) -> &str {
        "CourseSearch"
    }

    fn matches(&self, course: &Course, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        contains_ignore_case(&course.title, &term)
            || contains_ignore_case(&course.description, &term)
            || contains_ignore_case(&course.instructor, &term)
            || course.tags.iter().any(|tag| contains_ignore_case(tag, &term))
    }
}

/// Category name equality, ignoring case.
pub struct CourseCategory;

impl Predicate<Course, str> for CourseCategory {
    fn name(&self) -> &str {
        "CourseCategory"
    }

    fn matches(&self, course: &Course, category: &str) -> bool {
        course.category.eq_ignore_ascii_case(category.trim())
    }
}

/// Level equality. A criterion that isn't a known level matches nothing.
pub struct CourseLevelMatch;

impl Predicate<Course, str> for CourseLevelMatch {
    fn name(&self) -> &str {
        "CourseLevelMatch"
    }

    fn matches(&self, course: &Course, level: &str) -> bool {
        level
            .parse::<CourseLevel>()
            .is_ok_and(|level| course.level == level)
    }
}

/// Keeps courses carrying at least one of the selected tags (ignoring case).
pub struct CourseTags;

impl Predicate<Course, [String]> for CourseTags {
    fn name(&self) -> &str {
        "CourseTags"
    }

    fn matches(&self, course: &Course, tags: &[String]) -> bool {
        tags.iter()
            .any(|wanted| course.tags.iter().any(|tag| tag.eq_ignore_ascii_case(wanted)))
    }
}

/// Price bounds. Values of any other shape don't constrain.
pub struct PriceRange;

impl Predicate<Course, FilterValue> for PriceRange {
    fn name(&self) -> &str {
        "PriceRange"
    }

    fn matches(&self, course: &Course, value: &FilterValue) -> bool {
        let price = f64::from(course.price);
        match value {
            FilterValue::Range { min, max } => price >= *min && price <= *max,
            FilterValue::Number(max) => price <= *max,
            _ => true,
        }
    }
}

/// Minimum average rating.
pub struct MinRating;

impl Predicate<Course, FilterValue> for MinRating {
    fn name(&self) -> &str {
        "MinRating"
    }

    fn matches(&self, course: &Course, value: &FilterValue) -> bool {
        value
            .as_number()
            .is_none_or(|min| f64::from(course.rating) >= min)
    }
}

/// `Flag(true)` keeps only free courses; `Flag(false)` keeps everything.
pub struct FreeOnly;

impl Predicate<Course, FilterValue> for FreeOnly {
    fn name(&self) -> &str {
        "FreeOnly"
    }

    fn matches(&self, course: &Course, value: &FilterValue) -> bool {
        !value.as_flag().unwrap_or(false) || course.is_free()
    }
}

/// Maximum total runtime in minutes.
pub struct MaxDuration;

impl Predicate<Course, FilterValue> for MaxDuration {
    fn name(&self) -> &str {
        "MaxDuration"
    }

    fn matches(&self, course: &Course, value: &FilterValue) -> bool {
        value
            .as_number()
            .is_none_or(|max| f64::from(course.total_duration_minutes()) <= max)
    }
}

/// Every course predicate, registered under its dimension or custom key
pub fn course_predicates() -> PredicateSet<Course> {
    PredicateSet::new()
        .with_search(CourseSearch)
        .with_category(CourseCategory)
        .with_level(CourseLevelMatch)
        .with_tags(CourseTags)
        .with_custom(PRICE_RANGE, PriceRange)
        .with_custom(MIN_RATING, MinRating)
        .with_custom(FREE_ONLY, FreeOnly)
        .with_custom(MAX_DURATION, MaxDuration)
}
