//! Catalog building and indexing logic.
//!
//! Builds a [`Catalog`] from parsed records:
//! - primary stores (courses, teachers) with id -> position maps
//! - secondary indices (category, teacher)
//! - per-category statistics

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

impl Catalog {
    /// Load a catalog from a data directory containing `courses.json` and,
    /// optionally, `teachers.json`.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let courses_path = data_dir.join("courses.json");
        let teachers_path = data_dir.join("teachers.json");

        let (courses, teachers) = rayon::join(
            || parser::parse_courses(&courses_path),
            || parser::parse_teachers(&teachers_path),
        );
        let catalog = Self::from_records(courses?, teachers?)?;

        let (courses, teachers, lessons) = catalog.counts();
        tracing::info!(
            "Loaded catalog from {}: {} courses, {} teachers, {} lessons",
            data_dir.display(),
            courses,
            teachers,
            lessons
        );
        Ok(catalog)
    }

    /// Build and validate a catalog from already-parsed records
    pub fn from_records(courses: Vec<Course>, teachers: Vec<Teacher>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for teacher in teachers {
            catalog.insert_teacher(teacher)?;
        }
        for course in courses {
            catalog.insert_course(course)?;
        }

        catalog.build_secondary_indices();
        catalog.compute_category_stats();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Rebuild the category and teacher indices and teacher course counts
    pub fn build_secondary_indices(&mut self) {
        self.category_index.clear();
        self.teacher_index.clear();

        for course in &self.courses {
            self.category_index
                .entry(course.category.clone())
                .or_default()
                .push(course.id);

            if let Some(teacher_id) = course.teacher_id {
                self.teacher_index.entry(teacher_id).or_default().push(course.id);
            }
        }

        for teacher in &mut self.teachers {
            teacher.course_count = self
                .teacher_index
                .get(&teacher.id)
                .map(|ids| ids.len() as u32)
                .unwrap_or(0);
        }
    }

    /// Compute per-category statistics in parallel
    pub fn compute_category_stats(&mut self) {
        let stats: Vec<(String, CategoryStats)> = self
            .category_index
            .par_iter()
            .map(|(category, ids)| {
                let courses: Vec<&Course> = ids
                    .iter()
                    .filter_map(|id| self.get_course(*id))
                    .collect();

                let course_count = courses.len() as u32;
                let avg_rating = if courses.is_empty() {
                    0.0
                } else {
                    courses.iter().map(|c| c.rating).sum::<f32>() / courses.len() as f32
                };
                let total_enrolled = courses.iter().map(|c| c.enrolled_students as u64).sum();
                let free_courses = courses.iter().filter(|c| c.is_free()).count() as u32;

                (
                    category.clone(),
                    CategoryStats {
                        course_count,
                        avg_rating,
                        total_enrolled,
                        free_courses,
                    },
                )
            })
            .collect();

        self.category_stats = stats.into_iter().collect();
    }

    /// Check referential integrity and value ranges
    pub fn validate(&self) -> Result<()> {
        for course in &self.courses {
            if course.title.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "course {} has an empty title",
                    course.id
                )));
            }
            if !(0.0..=5.0).contains(&course.rating) {
                return Err(CatalogError::ValidationError(format!(
                    "course {} has rating {} outside 0-5",
                    course.id, course.rating
                )));
            }
            if course.price < 0.0 {
                return Err(CatalogError::ValidationError(format!(
                    "course {} has a negative price",
                    course.id
                )));
            }
            // Only checked when a teacher directory was loaded at all
            if let Some(teacher_id) = course.teacher_id {
                if !self.teachers.is_empty() && self.get_teacher(teacher_id).is_none() {
                    return Err(CatalogError::MissingReference {
                        entity: "teacher".to_string(),
                        id: teacher_id.to_string(),
                    });
                }
            }

            let mut lesson_ids = HashSet::new();
            for lesson in &course.lessons {
                if !lesson_ids.insert(lesson.id) {
                    return Err(CatalogError::DuplicateId {
                        entity: format!("lesson in course {}", course.id),
                        id: lesson.id.to_string(),
                    });
                }
            }
        }

        for teacher in &self.teachers {
            if !(0.0..=5.0).contains(&teacher.rating) {
                return Err(CatalogError::ValidationError(format!(
                    "teacher {} has rating {} outside 0-5",
                    teacher.id, teacher.rating
                )));
            }
        }

        Ok(())
    }
}
