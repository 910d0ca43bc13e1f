//! Direct image detection.

/// Static image extensions rendered as-is
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "ico"];

const DATA_IMAGE_PREFIX: &str = "data:image/";

/// Whether `url` can be handed straight to an image element: an inline
/// `data:image/...` payload, or a path ending in a known image extension
/// (case-insensitive) optionally followed by a `?query`.
pub fn is_image_url(url: &str) -> bool {
    is_inline_image(url) || has_image_extension(url)
}

pub fn is_inline_image(url: &str) -> bool {
    url.get(..DATA_IMAGE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DATA_IMAGE_PREFIX))
}

fn has_image_extension(url: &str) -> bool {
    let path = url.split_once('?').map_or(url, |(path, _)| path);
    let Some((_, extension)) = path.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| extension.eq_ignore_ascii_case(known))
}
