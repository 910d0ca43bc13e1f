//! Predicates for the teacher directory.
//!
//! The directory reuses the category dimension for subjects; it has no
//! level or tag filters.

use crate::filter_state::FilterValue;
use crate::predicate_set::PredicateSet;
use crate::predicates::course::MIN_RATING;
use crate::traits::Predicate;
use catalog::Teacher;

/// Case-insensitive substring search over name, bio and subjects.
pub struct TeacherSearch;

impl Predicate<Teacher, str> for TeacherSearch {
    fn name(&self) -> &str {
        "TeacherSearch"
    }

    fn matches(&self, teacher: &Teacher, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        teacher.name.to_lowercase().contains(&term)
            || teacher.bio.to_lowercase().contains(&term)
            || teacher
                .subjects
                .iter()
                .any(|subject| subject.to_lowercase().contains(&term))
    }
}

/// Keeps teachers who teach the selected subject.
pub struct TeacherSubject;

impl Predicate<Teacher, str> for TeacherSubject {
    fn name(&self) -> &str {
        "TeacherSubject"
    }

    fn matches(&self, teacher: &Teacher, subject: &str) -> bool {
        teacher
            .subjects
            .iter()
            .any(|s| s.eq_ignore_ascii_case(subject.trim()))
    }
}

/// Minimum teacher rating.
pub struct TeacherMinRating;

impl Predicate<Teacher, FilterValue> for TeacherMinRating {
    fn name(&self) -> &str {
        "TeacherMinRating"
    }

    fn matches(&self, teacher: &Teacher, value: &FilterValue) -> bool {
        value
            .as_number()
            .is_none_or(|min| f64::from(teacher.rating) >= min)
    }
}

pub fn teacher_predicates() -> PredicateSet<Teacher> {
    PredicateSet::new()
        .with_search(TeacherSearch)
        .with_category(TeacherSubject)
        .with_custom(MIN_RATING, TeacherMinRating)
}
