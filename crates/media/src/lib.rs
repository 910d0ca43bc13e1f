//! # Media Crate
//!
//! Turns a stored media reference (course thumbnail, lesson video, avatar)
//! into something a view can render: the image itself, the thumbnail of a
//! recognized video, or a placeholder.
//!
//! ## Components
//!
//! - **video**: ordered URL shape matchers, video ids, thumbnail/embed URLs
//! - **image**: direct image detection (extensions, inline payloads)
//! - **classify**: `classify` / `classify_with` and `MediaReference`
//! - **slot**: `MediaSlot`, which downgrades to a placeholder after a load failure
//!
//! ## Example Usage
//!
//! ```ignore
//! use media::{classify, MediaReference, MediaSlot};
//!
//! match classify(course.thumbnail.as_deref()) {
//!     MediaReference::VideoThumbnail { url, video_id } => { /* ... */ }
//!     MediaReference::Image { url } => { /* ... */ }
//!     MediaReference::Placeholder => { /* ... */ }
//! }
//!
//! let mut slot = MediaSlot::new(lesson.video_url.as_deref());
//! // the <img> errored:
//! slot.report_load_failure();
//! ```
//!
//! Everything here is pure and synchronous; nothing is fetched.

pub mod classify;
pub mod image;
pub mod slot;
pub mod video;

pub use classify::{classify, classify_with, ClassifyOptions, MediaReference};
pub use image::{is_image_url, IMAGE_EXTENSIONS};
pub use slot::MediaSlot;
pub use video::{
    embed_url, extract_video_id, thumbnail_url, to_embed_url, watch_url, ThumbnailQuality,
    VideoId, VideoShape,
};
