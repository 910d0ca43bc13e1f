//! Filtering and pagination for LMS listing screens.
//!
//! This crate provides:
//! - Predicate trait and PredicateSet for per-domain matching rules
//! - FilterState / FilterSession for the active filter selection
//! - FilterEngine for applying a selection to a list
//! - Paginator for paging through the filtered result
//!
//! ## Architecture
//! A listing view processes its records in stages:
//! 1. The FilterEngine keeps the records that pass every active filter
//! 2. The Paginator is told the filtered count and slices out the current page
//! 3. The view renders the page and the pager's visible page numbers
//!
//! ## Example Usage
//! ```ignore
//! use listing::{FilterEngine, FilterSession, ListingConfig, Selection};
//! use listing::predicates::course_predicates;
//!
//! let engine = FilterEngine::new(course_predicates());
//! let mut session = FilterSession::new();
//! session.set_category(Selection::only("Programming"));
//!
//! let view = engine.view(catalog.courses(), session.state());
//! let mut pager = ListingConfig::default().paginator(view.result_count())?;
//! pager.go_to_next_page();
//! let page = pager.page_items(view.items());
//! ```

pub mod config;
pub mod error;
pub mod filter_engine;
pub mod filter_state;
pub mod pagination;
pub mod predicate_set;
pub mod predicates;
pub mod session;
pub mod traits;

// Re-export main types
pub use config::ListingConfig;
pub use error::{ListingError, Result};
pub use filter_engine::{apply_filters, item_passes, FilterEngine, FilteredView};
pub use filter_state::{Dimension, FilterState, FilterValue, Selection, ALL_CATEGORIES, ALL_LEVELS};
pub use pagination::{PageInfo, Paginator};
pub use predicate_set::PredicateSet;
pub use session::FilterSession;
pub use traits::{predicate_fn, FnPredicate, Predicate};
