//! Video id extraction for video-sharing page URLs.
//!
//! Recognition is an ordered list of URL shapes. Each shape finds where an id
//! would start, the id runs until `#`, `&`, `?` or the end of the string, and
//! only an 11-character id over `[A-Za-z0-9_-]` is accepted. A shape that
//! finds a malformed id doesn't stop the shapes after it.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const VIDEO_ID_LEN: usize = 11;

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";
const EMBED_BASE: &str = "https://www.youtube.com/embed";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// A validated 11-character video id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Validate a candidate id. Returns `None` unless it is exactly 11
    /// characters drawn from letters, digits, `-` and `_`.
    pub fn parse(candidate: &str) -> Option<Self> {
        let valid = candidate.len() == VIDEO_ID_LEN
            && candidate
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        valid.then(|| VideoId(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        VideoId::parse(&value).ok_or_else(|| format!("invalid video id: {value}"))
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Accepted URL shapes, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoShape {
    /// `youtu.be/ID`
    Short,
    /// `.../embed/ID`
    Embed,
    /// `.../v/ID`
    LegacyV,
    /// `.../u/<user>/ID`
    LegacyUser,
    /// `watch?v=ID`, or `v=ID` later in the query (`watch?feature=x&v=ID`)
    Watch,
    /// `&v=ID` anywhere (`attribution_link?a=x&v=ID`, `playlist?list=x&v=ID`)
    AmpV,
}

impl VideoShape {
    pub const ORDERED: [VideoShape; 6] = [
        VideoShape::Short,
        VideoShape::Embed,
        VideoShape::LegacyV,
        VideoShape::LegacyUser,
        VideoShape::Watch,
        VideoShape::AmpV,
    ];

    /// The raw id candidate this shape finds in `url`, if the shape applies.
    /// The candidate is not validated.
    pub fn candidate(self, url: &str) -> Option<&str> {
        match self {
            VideoShape::Short => after_marker(url, "youtu.be/").map(id_run),
            VideoShape::Embed => after_marker(url, "/embed/").map(id_run),
            VideoShape::LegacyV => after_marker(url, "/v/").map(id_run),
            VideoShape::LegacyUser => legacy_user_candidate(url),
            VideoShape::Watch => watch_candidate(url),
            VideoShape::AmpV => after_marker(url, "&v=").map(id_run),
        }
    }

    /// The validated id this shape finds in `url`
    pub fn extract(self, url: &str) -> Option<VideoId> {
        self.candidate(url).and_then(VideoId::parse)
    }
}

fn after_marker<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    url.find(marker).map(|idx| &url[idx + marker.len()..])
}

/// Everything up to the first `#`, `&` or `?`
fn id_run(rest: &str) -> &str {
    let end = rest.find(['#', '&', '?']).unwrap_or(rest.len());
    &rest[..end]
}

fn legacy_user_candidate(url: &str) -> Option<&str> {
    let rest = after_marker(url, "/u/")?;
    let slash = rest.find('/')?;
    let user = &rest[..slash];
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    if user.is_empty() || !user.chars().all(is_word) {
        return None;
    }
    Some(id_run(&rest[slash + 1..]))
}

fn watch_candidate(url: &str) -> Option<&str> {
    let query = after_marker(url, "watch?")?;
    let query = &query[..query.find('#').unwrap_or(query.len())];
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
        .map(id_run)
}

/// Extract a video id by trying each shape in order.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VideoShape::ORDERED
        .iter()
        .find_map(|shape| shape.extract(url))
}

/// Thumbnail sizes published for every video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailQuality {
    /// 120x90
    Default,
    /// 320x180
    Medium,
    /// 480x360
    #[default]
    High,
    /// 640x480
    Standard,
    /// Up to 1280x720; missing for some videos
    MaxRes,
}

impl ThumbnailQuality {
    pub fn file_name(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
            ThumbnailQuality::Standard => "sddefault.jpg",
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
        }
    }
}

pub fn thumbnail_url(id: &VideoId, quality: ThumbnailQuality) -> String {
    format!("{}/{}/{}", THUMBNAIL_HOST, id, quality.file_name())
}

/// URL for an embedded player
pub fn embed_url(id: &VideoId) -> String {
    format!("{}/{}", EMBED_BASE, id)
}

/// Canonical watch page URL
pub fn watch_url(id: &VideoId) -> String {
    format!("{}{}", WATCH_BASE, id)
}

/// Rewrite any recognized video URL into its embed URL.
pub fn to_embed_url(url: &str) -> Option<String> {
    extract_video_id(url).map(|id| embed_url(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    fn id_of(url: &str) -> Option<String> {
        extract_video_id(url).map(String::from)
    }

    #[test]
    fn test_video_id_validation() {
        assert!(VideoId::parse(ID).is_some());
        assert!(VideoId::parse("abc-DEF_123").is_some());
        assert!(VideoId::parse("dQw4w9WgXc").is_none());
        assert!(VideoId::parse("dQw4w9WgXcQQ").is_none());
        assert!(VideoId::parse("dQw4w9WgX.Q").is_none());
        assert!(VideoId::parse("").is_none());
    }

    #[test]
    fn test_short_shape() {
        assert_eq!(VideoShape::Short.candidate("https://youtu.be/dQw4w9WgXcQ"), Some(ID));
        assert_eq!(
            VideoShape::Short.candidate("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some(ID)
        );
        assert_eq!(VideoShape::Short.candidate("https://www.youtube.com/watch?v=x"), None);
    }

    #[test]
    fn test_embed_shape() {
        assert_eq!(
            VideoShape::Embed.extract("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"),
            VideoId::parse(ID)
        );
        assert_eq!(
            VideoShape::Embed.extract("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"),
            VideoId::parse(ID)
        );
    }

    #[test]
    fn test_legacy_v_shape() {
        assert_eq!(
            VideoShape::LegacyV.extract("https://www.youtube.com/v/dQw4w9WgXcQ#t=10"),
            VideoId::parse(ID)
        );
    }

    #[test]
    fn test_legacy_user_shape() {
        assert_eq!(
            VideoShape::LegacyUser.extract("https://www.youtube.com/u/somebody/dQw4w9WgXcQ"),
            VideoId::parse(ID)
        );
        assert_eq!(
            VideoShape::LegacyUser.candidate("https://www.youtube.com/u/x/dQw4w9WgXcQ"),
            Some(ID)
        );
        assert_eq!(
            VideoShape::LegacyUser.candidate("https://www.youtube.com/u/bad.name/dQw4w9WgXcQ"),
            None
        );
    }

    #[test]
    fn test_watch_shape() {
        assert_eq!(
            VideoShape::Watch.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            VideoId::parse(ID)
        );
        assert_eq!(
            VideoShape::Watch.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1"),
            VideoId::parse(ID)
        );
        assert_eq!(
            VideoShape::Watch.extract("https://m.youtube.com/watch?feature=shared&v=dQw4w9WgXcQ"),
            VideoId::parse(ID)
        );
        assert_eq!(
            VideoShape::Watch.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=5"),
            VideoId::parse(ID)
        );
        assert_eq!(VideoShape::Watch.candidate("https://www.youtube.com/watch?list=PL1"), None);
    }

    #[test]
    fn test_amp_v_shape() {
        assert_eq!(
            VideoShape::AmpV.extract("https://www.youtube.com/attribution_link?a=abc&v=dQw4w9WgXcQ"),
            VideoId::parse(ID)
        );
        assert_eq!(
            VideoShape::AmpV.extract("https://www.youtube.com/playlist?list=PL1&v=dQw4w9WgXcQ&t=3"),
            VideoId::parse(ID)
        );
        assert_eq!(VideoShape::AmpV.candidate("https://www.youtube.com/playlist?v=x"), None);
        assert_eq!(VideoShape::AmpV.extract("https://example.com/page?a=1&v=short"), None);

        // Not behind a watch? marker, so only the query shape sees it
        let url = "https://www.youtube.com/attribution_link?a=abc&v=dQw4w9WgXcQ";
        assert_eq!(VideoShape::Watch.candidate(url), None);
        assert_eq!(id_of(url).as_deref(), Some(ID));
        assert_eq!(
            id_of("https://www.youtube.com/playlist?list=PL1&v=dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_id_terminators() {
        for suffix in ["", "#frag", "&x=1", "?x=1"] {
            let url = format!("https://youtu.be/{ID}{suffix}");
            assert_eq!(id_of(&url).as_deref(), Some(ID), "{url}");
        }
        // Anything else glued to the id makes it the wrong length
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ/extra"), None);
        assert_eq!(id_of("https://www.youtube.com/embed/dQw4w9WgXcQX"), None);
        assert_eq!(id_of("https://youtu.be/short"), None);
    }

    #[test]
    fn test_malformed_shape_falls_through_to_later_shapes() {
        // The embed path holds a bad id but the query carries a good one
        let url = "https://www.youtube.com/embed/nope/watch?v=dQw4w9WgXcQ";
        assert_eq!(VideoShape::Embed.extract(url), None);
        assert_eq!(id_of(url).as_deref(), Some(ID));
    }

    #[test]
    fn test_unrelated_urls() {
        assert_eq!(id_of("not-a-url"), None);
        assert_eq!(id_of("https://example.com/photo.png"), None);
        assert_eq!(id_of("https://vimeo.com/123456789"), None);
    }

    #[test]
    fn test_derived_urls() {
        let id = VideoId::parse(ID).unwrap();
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::default()),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::MaxRes),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
        assert_eq!(embed_url(&id), "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(watch_url(&id), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            to_embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }
}
