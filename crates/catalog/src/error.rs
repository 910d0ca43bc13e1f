//! Error types for the catalog crate.
//!
//! Loading a catalog is the only fallible operation here; every lookup on a
//! built [`Catalog`](crate::Catalog) returns `Option` or an empty slice.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required data file is missing from the data directory
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A data file is not valid JSON for the expected record type
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Two records of the same kind share an id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// A record refers to something that doesn't exist
    /// (e.g., a course whose teacher_id is not in teachers.json)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
