//! One rendered media element and its load-failure downgrade.

use crate::classify::{classify_with, ClassifyOptions, MediaReference};

/// Holds the classification for one image element.
///
/// The renderer calls [`set_url`](Self::set_url) whenever its input changes
/// and [`report_load_failure`](Self::report_load_failure) when the resolved
/// image fails to load (e.g. the thumbnail of a deleted video). A failure
/// sticks until the input URL changes; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSlot {
    url: Option<String>,
    options: ClassifyOptions,
    reference: MediaReference,
    failed: bool,
}

impl MediaSlot {
    pub fn new(url: Option<&str>) -> Self {
        Self::with_options(url, ClassifyOptions::default())
    }

    pub fn with_options(url: Option<&str>, options: ClassifyOptions) -> Self {
        Self {
            url: url.map(str::to_string),
            options,
            reference: classify_with(url, options),
            failed: false,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn reference(&self) -> &MediaReference {
        &self.reference
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Feed a new input. Returns `true` if it differed from the previous one,
    /// in which case the slot is reclassified from scratch and any earlier
    /// failure is forgotten.
    pub fn set_url(&mut self, url: Option<&str>) -> bool {
        if self.url.as_deref() == url {
            return false;
        }
        self.url = url.map(str::to_string);
        self.failed = false;
        self.reference = classify_with(url, self.options);
        true
    }

    /// The resolved image failed to load: show the placeholder from now on.
    pub fn report_load_failure(&mut self) {
        if self.reference.is_placeholder() {
            return;
        }
        tracing::warn!(
            "Media failed to load, falling back to placeholder: {}",
            self.reference.url().unwrap_or_default()
        );
        self.failed = true;
        self.reference = classify_with(
            self.url.as_deref(),
            ClassifyOptions {
                force_placeholder: true,
                ..self.options
            },
        );
    }
}

impl Default for MediaSlot {
    fn default() -> Self {
        Self::new(None)
    }
}
