//! # Catalog Crate
//!
//! In-memory course and teacher catalog for the LMS listing screens.
//!
//! ## Main Components
//!
//! - **types**: Domain records (Course, Lesson, Teacher) and the Catalog store
//! - **parser**: Read courses.json / teachers.json into records
//! - **index**: Build lookup indices and per-category statistics
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data/catalog"))?;
//!
//! for category in catalog.categories() {
//!     println!("{category}: {} courses", catalog.get_courses_by_category(category).len());
//! }
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    CourseId,
    LessonId,
    TeacherId,
    // Core types
    Catalog,
    CategoryStats,
    Course,
    Lesson,
    Teacher,
    // Enums
    CourseLevel,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        let (courses, teachers, lessons) = catalog.counts();

        assert_eq!(courses, 0);
        assert_eq!(teachers, 0);
        assert_eq!(lessons, 0);
    }

    #[test]
    fn test_insert_course() {
        let mut catalog = Catalog::new();

        let course = Course {
            id: 1,
            title: "Intro to Rust".to_string(),
            description: "Ownership and borrowing".to_string(),
            teacher_id: None,
            instructor: "Ferris".to_string(),
            category: "Programming".to_string(),
            level: CourseLevel::Beginner,
            tags: vec!["rust".to_string()],
            price: 0.0,
            rating: 4.8,
            enrolled_students: 1200,
            duration_minutes: 90,
            thumbnail: None,
            lessons: vec![],
        };

        catalog.insert_course(course).unwrap();

        let retrieved = catalog.get_course(1).unwrap();
        assert_eq!(retrieved.title, "Intro to Rust");
        assert!(retrieved.is_free());
        assert_eq!(catalog.courses().len(), 1);
    }

    #[test]
    fn test_course_level_parsing() {
        assert_eq!("advanced".parse::<CourseLevel>(), Ok(CourseLevel::Advanced));
        assert_eq!(" Beginner ".parse::<CourseLevel>(), Ok(CourseLevel::Beginner));
        assert!("All Levels".parse::<CourseLevel>().is_err());
        assert_eq!(CourseLevel::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        assert!(catalog.get_course(999).is_none());
        assert!(catalog.get_teacher(999).is_none());
        assert!(catalog.get_courses_by_category("Nope").is_empty());
        assert!(catalog.get_courses_by_teacher(999).is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.tags().is_empty());
    }
}
