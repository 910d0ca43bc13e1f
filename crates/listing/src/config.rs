//! Listing configuration: page size and pager width.

use crate::error::{ListingError, Result};
use crate::pagination::Paginator;
use serde::Deserialize;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub items_per_page: usize,
    pub max_visible_pages: usize,
    pub initial_page: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            initial_page: 0,
        }
    }
}

impl ListingConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: ListingConfig =
            serde_json::from_str(raw).map_err(|e| ListingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(ListingError::InvalidPageSize);
        }
        if self.max_visible_pages == 0 {
            return Err(ListingError::InvalidMaxVisible);
        }
        Ok(())
    }

    /// A paginator over `total_items` with this page size, starting on the
    /// configured initial page (clamped to the last page)
    pub fn paginator(&self, total_items: usize) -> Result<Paginator> {
        let per_page = NonZeroUsize::new(self.items_per_page).ok_or(ListingError::InvalidPageSize)?;
        Ok(Paginator::new(per_page)
            .with_total_items(total_items)
            .with_initial_page(self.initial_page))
    }
}
