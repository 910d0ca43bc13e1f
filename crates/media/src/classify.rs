//! Classify a stored media reference into something renderable.

use crate::image::is_image_url;
use crate::video::{extract_video_id, thumbnail_url, ThumbnailQuality, VideoId};
use serde::Serialize;

/// What a media slot should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaReference {
    /// Render this URL directly
    Image { url: String },
    /// Thumbnail derived from a recognized video
    VideoThumbnail { url: String, video_id: VideoId },
    /// Nothing usable; render the default artwork
    Placeholder,
}

impl MediaReference {
    /// URL to load, `None` for a placeholder
    pub fn url(&self) -> Option<&str> {
        match self {
            MediaReference::Image { url } | MediaReference::VideoThumbnail { url, .. } => {
                Some(url)
            }
            MediaReference::Placeholder => None,
        }
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            MediaReference::VideoThumbnail { video_id, .. } => Some(video_id),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, MediaReference::Placeholder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyOptions {
    /// Skip recognition and return a placeholder (the resolved URL already
    /// failed to load)
    pub force_placeholder: bool,
    pub thumbnail_quality: ThumbnailQuality,
}

/// Classify with default options.
///
/// ## Algorithm
/// First match wins:
/// 1. missing or blank input -> `Placeholder`
/// 2. recognized video URL with a valid id -> `VideoThumbnail`
/// 3. image extension or inline image payload -> `Image`
/// 4. anything else -> `Placeholder`
pub fn classify(url: Option<&str>) -> MediaReference {
    classify_with(url, ClassifyOptions::default())
}

pub fn classify_with(url: Option<&str>, options: ClassifyOptions) -> MediaReference {
    if options.force_placeholder {
        return MediaReference::Placeholder;
    }

    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return MediaReference::Placeholder;
    };

    if let Some(video_id) = extract_video_id(url) {
        return MediaReference::VideoThumbnail {
            url: thumbnail_url(&video_id, options.thumbnail_quality),
            video_id,
        };
    }

    if is_image_url(url) {
        return MediaReference::Image {
            url: url.to_string(),
        };
    }

    MediaReference::Placeholder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let reference = classify(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        let id = reference.video_id().unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
        assert!(reference.url().unwrap().contains("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_short_url_same_id() {
        let long = classify(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        let short = classify(Some("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(long, short);
    }

    #[test]
    fn test_amp_v_query_is_a_video() {
        for url in [
            "https://www.youtube.com/attribution_link?a=abc&v=dQw4w9WgXcQ",
            "https://www.youtube.com/playlist?list=PL1&v=dQw4w9WgXcQ",
        ] {
            let reference = classify(Some(url));
            assert_eq!(reference.video_id().map(|id| id.as_str()), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn test_image_url_unchanged() {
        assert_eq!(
            classify(Some("https://example.com/photo.png")),
            MediaReference::Image {
                url: "https://example.com/photo.png".to_string()
            }
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(classify(None), MediaReference::Placeholder);
        assert_eq!(classify(Some("")), MediaReference::Placeholder);
        assert_eq!(classify(Some("   ")), MediaReference::Placeholder);
        assert_eq!(classify(Some("not-a-url")), MediaReference::Placeholder);
        assert_eq!(
            classify(Some("https://example.com/lesson/42")),
            MediaReference::Placeholder
        );
    }

    #[test]
    fn test_bad_video_id_falls_through() {
        // Wrong id length and no image extension
        assert!(classify(Some("https://youtu.be/tooShort")).is_placeholder());
        // Wrong id length, but the path is an image
        assert_eq!(
            classify(Some("https://example.com/v/thumbnail.png")),
            MediaReference::Image {
                url: "https://example.com/v/thumbnail.png".to_string()
            }
        );
    }

    #[test]
    fn test_force_placeholder() {
        let options = ClassifyOptions {
            force_placeholder: true,
            ..Default::default()
        };
        assert!(classify_with(Some("https://youtu.be/dQw4w9WgXcQ"), options).is_placeholder());
        assert!(classify_with(Some("https://example.com/a.png"), options).is_placeholder());
    }

    #[test]
    fn test_thumbnail_quality_option() {
        let options = ClassifyOptions {
            thumbnail_quality: ThumbnailQuality::Medium,
            ..Default::default()
        };
        let reference = classify_with(Some("https://youtu.be/dQw4w9WgXcQ"), options);
        assert_eq!(
            reference.url(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg")
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(classify(Some("https://youtu.be/dQw4w9WgXcQ"))).unwrap();
        assert_eq!(json["kind"], "video_thumbnail");
        assert_eq!(json["video_id"], "dQw4w9WgXcQ");

        let json = serde_json::to_value(classify(None)).unwrap();
        assert_eq!(json["kind"], "placeholder");
    }
}
