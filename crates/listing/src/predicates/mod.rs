//! Stock predicates for the LMS record types.
//!
//! Listing screens for other record types register their own predicates
//! with [`PredicateSet`](crate::PredicateSet) or [`predicate_fn`](crate::predicate_fn).

pub mod course;
pub mod teacher;

// Re-export for convenience
pub use course::{
    course_predicates, CourseCategory, CourseLevelMatch, CourseSearch, CourseTags, FreeOnly,
    MaxDuration, MinRating, PriceRange, FREE_ONLY, MAX_DURATION, MIN_RATING, PRICE_RANGE,
};
pub use teacher::{teacher_predicates, TeacherMinRating, TeacherSearch, TeacherSubject};
