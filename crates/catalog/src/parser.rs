//! Parser for catalog data files.
//!
//! A data directory holds two JSON arrays:
//! - courses.json: `[Course, ...]`
//! - teachers.json: `[Teacher, ...]` (optional)

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_json<T: DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a JSON array of courses
pub fn parse_courses_str(content: &str) -> Result<Vec<Course>> {
    parse_json("courses.json", content)
}

/// Parse a JSON array of teachers
pub fn parse_teachers_str(content: &str) -> Result<Vec<Teacher>> {
    parse_json("teachers.json", content)
}

pub fn parse_courses(path: &Path) -> Result<Vec<Course>> {
    let content = read_file(path)?;
    parse_courses_str(&content)
}

/// Parse teachers.json; a missing file is an empty directory, not an error
pub fn parse_teachers(path: &Path) -> Result<Vec<Teacher>> {
    if !path.exists() {
        tracing::debug!("No teachers file at {}, continuing without teachers", path.display());
        return Ok(Vec::new());
    }
    let content = read_file(path)?;
    parse_teachers_str(&content)
}
