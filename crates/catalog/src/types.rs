//! Core domain types for the LMS catalog.
//!
//! These are the records the listing screens page through: courses (with
//! their lessons) and the teachers who run them. Everything is plain data
//! with serde derives so a catalog can be read straight from JSON.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a course
pub type CourseId = u32;

/// Unique identifier for a teacher
pub type TeacherId = u32;

/// Unique identifier for a lesson (unique within its course)
pub type LessonId = u32;

// =============================================================================
// Course-related Types
// =============================================================================

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown course level: {s}"))
    }
}

/// A single lesson inside a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub duration_minutes: u32,
    /// Stored media reference: a video page URL, an image URL, or nothing
    #[serde(default)]
    pub video_url: Option<String>,
}

/// A course as shown in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Teacher record backing `instructor`, when the catalog has one
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    pub instructor: String,
    pub category: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Price in the catalog currency; 0.0 means free
    #[serde(default)]
    pub price: f32,
    /// Average rating from 0.0 to 5.0
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub enrolled_students: u32,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }

    /// Total runtime: the declared duration, or the sum of lesson durations
    /// when the course doesn't declare one.
    pub fn total_duration_minutes(&self) -> u32 {
        if self.duration_minutes > 0 {
            self.duration_minutes
        } else {
            self.lessons.iter().map(|l| l.duration_minutes).sum()
        }
    }
}

// =============================================================================
// Teacher Type
// =============================================================================

/// A teacher listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: f32,
    /// Filled in from the courses when the catalog is built
    #[serde(default)]
    pub course_count: u32,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Precomputed statistics for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub course_count: u32,
    pub avg_rating: f32,
    pub total_enrolled: u64,
    pub free_courses: u32,
}

// =============================================================================
// Catalog - the in-memory course/teacher store
// =============================================================================

/// Holds all courses and teachers plus lookup indices.
///
/// Records keep their load order in `courses` / `teachers`; listing screens
/// filter those slices directly, so the order is the display order.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) courses: Vec<Course>,
    pub(crate) teachers: Vec<Teacher>,

    pub(crate) course_positions: HashMap<CourseId, usize>,
    pub(crate) teacher_positions: HashMap<TeacherId, usize>,

    /// Courses grouped by category name (sorted for stable listing)
    pub(crate) category_index: BTreeMap<String, Vec<CourseId>>,
    /// Courses grouped by teacher
    pub(crate) teacher_index: HashMap<TeacherId, Vec<CourseId>>,

    pub(crate) category_stats: BTreeMap<String, CategoryStats>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            teachers: Vec::new(),
            course_positions: HashMap::new(),
            teacher_positions: HashMap::new(),
            category_index: BTreeMap::new(),
            teacher_index: HashMap::new(),
            category_stats: BTreeMap::new(),
        }
    }

    /// All courses in load order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All teachers in load order
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.course_positions.get(&id).map(|&pos| &self.courses[pos])
    }

    pub fn get_teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teacher_positions.get(&id).map(|&pos| &self.teachers[pos])
    }

    /// Course ids in a category (exact name match, empty if unknown)
    pub fn get_courses_by_category(&self, category: &str) -> &[CourseId] {
        self.category_index
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Course ids taught by a teacher
    pub fn get_courses_by_teacher(&self, teacher_id: TeacherId) -> &[CourseId] {
        self.teacher_index
            .get(&teacher_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct category names, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.category_index.keys().map(String::as_str).collect()
    }

    /// Distinct tags across all courses, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .courses
            .iter()
            .flat_map(|c| c.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    pub fn get_category_stats(&self, category: &str) -> Option<&CategoryStats> {
        self.category_stats.get(category)
    }

    pub fn category_stats(&self) -> &BTreeMap<String, CategoryStats> {
        &self.category_stats
    }

    /// Insert a course; fails if the id is already present
    pub fn insert_course(&mut self, course: Course) -> crate::Result<()> {
        if self.course_positions.contains_key(&course.id) {
            return Err(crate::CatalogError::DuplicateId {
                entity: "course".to_string(),
                id: course.id.to_string(),
            });
        }
        self.course_positions.insert(course.id, self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    /// Insert a teacher; fails if the id is already present
    pub fn insert_teacher(&mut self, teacher: Teacher) -> crate::Result<()> {
        if self.teacher_positions.contains_key(&teacher.id) {
            return Err(crate::CatalogError::DuplicateId {
                entity: "teacher".to_string(),
                id: teacher.id.to_string(),
            });
        }
        self.teacher_positions.insert(teacher.id, self.teachers.len());
        self.teachers.push(teacher);
        Ok(())
    }

    /// (courses, teachers, lessons)
    pub fn counts(&self) -> (usize, usize, usize) {
        let lessons = self.courses.iter().map(|c| c.lessons.len()).sum();
        (self.courses.len(), self.teachers.len(), lessons)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
