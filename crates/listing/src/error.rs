//! Error types for the listing crate.
//!
//! Filtering and paging never fail; only building them from configuration can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    /// A page must hold at least one item
    #[error("items_per_page must be greater than zero")]
    InvalidPageSize,

    /// A pager control must show at least one page number
    #[error("max_visible_pages must be greater than zero")]
    InvalidMaxVisible,

    /// The configuration file could not be read or parsed
    #[error("Invalid listing configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ListingError>;
