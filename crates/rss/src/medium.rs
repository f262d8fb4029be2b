// ABOUTME: Coarse media classification (image/video/audio) for enclosures and content.
// ABOUTME: Classifies by MIME type first, falling back to the URL file extension.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Coarse content classification, independent of exact MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medium {
    Image,
    Video,
    Audio,
}

impl Medium {
    /// The wire value used by media:content medium attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Image => "image",
            Medium::Video => "video",
            Medium::Audio => "audio",
        }
    }

    /// Parses a medium attribute value, case-insensitively.
    pub fn parse(s: &str) -> Option<Medium> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Some(Medium::Image),
            "video" => Some(Medium::Video),
            "audio" => Some(Medium::Audio),
            _ => None,
        }
    }
}

/// MIME types whose top-level type doesn't reveal their medium.
static IRREGULAR_MIME: Lazy<HashMap<&'static str, Medium>> = Lazy::new(|| {
    HashMap::from([
        ("application/ogg", Medium::Audio),
        ("application/x-shockwave-flash", Medium::Video),
        ("application/mp4", Medium::Video),
    ])
});

/// File extensions to medium, for enclosures that carry no MIME type.
static EXTENSION_MEDIA: Lazy<HashMap<&'static str, Medium>> = Lazy::new(|| {
    HashMap::from([
        ("jpg", Medium::Image),
        ("jpeg", Medium::Image),
        ("png", Medium::Image),
        ("gif", Medium::Image),
        ("webp", Medium::Image),
        ("bmp", Medium::Image),
        ("svg", Medium::Image),
        ("mp4", Medium::Video),
        ("m4v", Medium::Video),
        ("mov", Medium::Video),
        ("avi", Medium::Video),
        ("webm", Medium::Video),
        ("mkv", Medium::Video),
        ("mpg", Medium::Video),
        ("mpeg", Medium::Video),
        ("mp3", Medium::Audio),
        ("m4a", Medium::Audio),
        ("aac", Medium::Audio),
        ("ogg", Medium::Audio),
        ("opus", Medium::Audio),
        ("wav", Medium::Audio),
        ("flac", Medium::Audio),
    ])
});

/// Classifies a MIME type into a medium. Prefix rules (image/, video/,
/// audio/) cover the regular cases, the static table the irregular ones.
pub fn classify_mime(mime: &str) -> Option<Medium> {
    let mime = mime.trim().to_ascii_lowercase();
    if mime.is_empty() {
        return None;
    }
    if let Some(medium) = IRREGULAR_MIME.get(mime.as_str()) {
        return Some(*medium);
    }
    if mime.starts_with("image/") {
        Some(Medium::Image)
    } else if mime.starts_with("video/") {
        Some(Medium::Video)
    } else if mime.starts_with("audio/") {
        Some(Medium::Audio)
    } else {
        None
    }
}

/// Classifies a URL into a medium by its path's file extension.
pub fn classify_url(url: &str) -> Option<Medium> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // Relative or otherwise unparseable URL: classify the raw string,
        // minus any query/fragment tail.
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    let file = path.rsplit('/').next().unwrap_or_default();
    let (stem, ext) = file.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    EXTENSION_MEDIA.get(ext.to_ascii_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_parse() {
        assert_eq!(Medium::parse("image"), Some(Medium::Image));
        assert_eq!(Medium::parse("VIDEO"), Some(Medium::Video));
        assert_eq!(Medium::parse(" audio "), Some(Medium::Audio));
        assert_eq!(Medium::parse("document"), None);
    }

    #[test]
    fn test_classify_mime_prefixes() {
        assert_eq!(classify_mime("image/jpeg"), Some(Medium::Image));
        assert_eq!(classify_mime("video/mp4"), Some(Medium::Video));
        assert_eq!(classify_mime("audio/mpeg"), Some(Medium::Audio));
        assert_eq!(classify_mime("text/plain"), None);
        assert_eq!(classify_mime(""), None);
    }

    #[test]
    fn test_classify_mime_irregular() {
        assert_eq!(classify_mime("application/ogg"), Some(Medium::Audio));
        assert_eq!(classify_mime("Application/MP4"), Some(Medium::Video));
    }

    #[test]
    fn test_classify_url() {
        assert_eq!(
            classify_url("https://example.com/img/photo.PNG"),
            Some(Medium::Image)
        );
        assert_eq!(
            classify_url("https://example.com/ep.mp3?session=1"),
            Some(Medium::Audio)
        );
        assert_eq!(classify_url("https://example.com/page.html"), None);
        assert_eq!(classify_url("https://example.com/noext"), None);
    }

    #[test]
    fn test_classify_url_relative() {
        assert_eq!(classify_url("/media/clip.mp4"), Some(Medium::Video));
        assert_eq!(classify_url("clip.mp4#t=10"), Some(Medium::Video));
    }
}
