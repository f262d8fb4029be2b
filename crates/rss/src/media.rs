// ABOUTME: Media RSS codecs: group, content, thumbnail, and the per-item extension holder.
// ABOUTME: Unrecognized media-block elements are absorbed verbatim and re-emitted on write.

use crate::enclosure::Enclosure;
use crate::medium::{classify_mime, classify_url, Medium};
use crate::ns;
use crate::xml_util::{non_empty, Element, ElementCodec};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A thumbnail image reference (media:thumbnail).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaThumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// NPT offset into the media the thumbnail was taken from.
    pub time: Option<String>,
}

impl MediaThumbnail {
    pub fn new(url: impl Into<String>) -> MediaThumbnail {
        MediaThumbnail {
            url: url.into(),
            ..MediaThumbnail::default()
        }
    }
}

impl ElementCodec for MediaThumbnail {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("thumbnail", ns::MEDIA);
        element.set_attr("url", &self.url);
        if let Some(width) = self.width.filter(|w| *w > 0) {
            element.set_attr("width", width);
        }
        if let Some(height) = self.height.filter(|h| *h > 0) {
            element.set_attr("height", height);
        }
        if let Some(time) = self.time.as_deref().filter(|t| !t.is_empty()) {
            element.set_attr("time", time);
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::MEDIA) {
            return;
        }
        self.url = element.attr_text("url");
        self.width = Some(element.attr_u32("width")).filter(|w| *w > 0);
        self.height = Some(element.attr_u32("height")).filter(|h| *h > 0);
        self.time = element.attr("time").and_then(non_empty);
    }
}

/// One rendition of attached media (media:content).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaContent {
    pub url: String,
    pub media_type: Option<String>,
    /// The declared medium attribute, kept verbatim (Media RSS allows values
    /// like "document" this model doesn't classify).
    pub medium: Option<String>,
    pub file_size: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub thumbnails: Vec<MediaThumbnail>,
    /// Absorbed media-namespace metadata (media:title, media:credit, ...).
    pub extras: Vec<Element>,
}

impl MediaContent {
    pub fn new(url: impl Into<String>) -> MediaContent {
        MediaContent {
            url: url.into(),
            ..MediaContent::default()
        }
    }

    /// A MediaContent view of a plain enclosure, used when the content-item
    /// lookup is asked to consider enclosures first.
    pub fn from_enclosure(enclosure: &Enclosure) -> MediaContent {
        MediaContent {
            url: enclosure.url.clone(),
            media_type: non_empty(&enclosure.mime_type),
            medium: enclosure.medium().map(|m| m.as_str().to_string()),
            file_size: Some(enclosure.length).filter(|l| *l > 0),
            ..MediaContent::default()
        }
    }

    /// The medium this content is classified into: the declared medium
    /// attribute first, then the MIME type, then the URL extension.
    pub fn effective_medium(&self) -> Option<Medium> {
        self.medium
            .as_deref()
            .and_then(Medium::parse)
            .or_else(|| self.media_type.as_deref().and_then(classify_mime))
            .or_else(|| classify_url(&self.url))
    }

    /// Same filter rule as the enclosure scan: exact case-insensitive MIME,
    /// or medium classification, or match-all when no filter is given.
    pub(crate) fn matches(&self, medium: Option<Medium>, mime_type: Option<&str>) -> bool {
        if medium.is_none() && mime_type.is_none() {
            return true;
        }
        if let Some(wanted) = mime_type {
            if self
                .media_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(wanted))
            {
                return true;
            }
        }
        if let Some(wanted) = medium {
            if self.effective_medium() == Some(wanted) {
                return true;
            }
        }
        false
    }

    /// Width/height bounds check for the image-item queries; 0 means
    /// unbounded on that side, a missing dimension counts as 0.
    pub(crate) fn within_bounds(
        &self,
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    ) -> bool {
        let width = self.width.unwrap_or(0);
        let height = self.height.unwrap_or(0);
        if min_width > 0 && width < min_width {
            return false;
        }
        if max_width > 0 && width > max_width {
            return false;
        }
        if min_height > 0 && height < min_height {
            return false;
        }
        if max_height > 0 && height > max_height {
            return false;
        }
        true
    }
}

impl ElementCodec for MediaContent {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("content", ns::MEDIA);
        element.set_attr("url", &self.url);
        if let Some(media_type) = self.media_type.as_deref().filter(|t| !t.is_empty()) {
            element.set_attr("type", media_type);
        }
        if let Some(medium) = self.medium.as_deref().filter(|m| !m.is_empty()) {
            element.set_attr("medium", medium);
        }
        if let Some(file_size) = self.file_size.filter(|s| *s > 0) {
            element.set_attr("fileSize", file_size);
        }
        if let Some(width) = self.width.filter(|w| *w > 0) {
            element.set_attr("width", width);
        }
        if let Some(height) = self.height.filter(|h| *h > 0) {
            element.set_attr("height", height);
        }
        for thumbnail in &self.thumbnails {
            element.push_child(thumbnail.to_element());
        }
        for extra in &self.extras {
            element.push_child(extra.clone());
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::MEDIA) {
            return;
        }
        self.url = element.attr_text("url");
        self.media_type = element.attr("type").and_then(non_empty);
        self.medium = element.attr("medium").and_then(non_empty);
        self.file_size = Some(element.attr_u64("fileSize")).filter(|s| *s > 0);
        self.width = Some(element.attr_u32("width")).filter(|w| *w > 0);
        self.height = Some(element.attr_u32("height")).filter(|h| *h > 0);
        for child in element.children() {
            match (child.namespace(), child.name()) {
                (Some(ns::MEDIA), "thumbnail") => {
                    self.thumbnails.push(MediaThumbnail::from_element(child));
                }
                (Some(ns::MEDIA | ns::DUBLIN_CORE_TERMS | ns::GEORSS | ns::GML), _) => {
                    self.extras.push(child.clone());
                }
                (namespace, name) => {
                    trace!(?namespace, name, "dropping unrecognized media:content child");
                }
            }
        }
    }
}

/// A grouped set of alternative renditions (media:group).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaGroup {
    pub contents: Vec<MediaContent>,
    pub thumbnails: Vec<MediaThumbnail>,
    pub extras: Vec<Element>,
}

impl MediaGroup {
    /// First thumbnail in the group: the group's own, then its contents'.
    pub fn thumbnail(&self) -> Option<&MediaThumbnail> {
        self.thumbnails
            .first()
            .or_else(|| self.contents.iter().find_map(|c| c.thumbnails.first()))
    }

    pub fn add_content(&mut self, content: MediaContent) {
        self.contents.push(content);
    }
}

impl ElementCodec for MediaGroup {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("group", ns::MEDIA);
        for content in &self.contents {
            element.push_child(content.to_element());
        }
        for thumbnail in &self.thumbnails {
            element.push_child(thumbnail.to_element());
        }
        for extra in &self.extras {
            element.push_child(extra.clone());
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::MEDIA) {
            return;
        }
        for child in element.children() {
            match (child.namespace(), child.name()) {
                (Some(ns::MEDIA), "content") => {
                    self.contents.push(MediaContent::from_element(child));
                }
                (Some(ns::MEDIA), "thumbnail") => {
                    self.thumbnails.push(MediaThumbnail::from_element(child));
                }
                (Some(ns::MEDIA | ns::DUBLIN_CORE_TERMS | ns::GEORSS | ns::GML), _) => {
                    self.extras.push(child.clone());
                }
                (namespace, name) => {
                    trace!(?namespace, name, "dropping unrecognized media:group child");
                }
            }
        }
    }
}

/// The media-extension data an item carries: groups, loose content items,
/// loose thumbnails, and absorbed extras. Not itself a wire element - its
/// parts are appended to the owning item in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaExtension {
    pub groups: Vec<MediaGroup>,
    pub contents: Vec<MediaContent>,
    pub thumbnails: Vec<MediaThumbnail>,
    pub extras: Vec<Element>,
}

impl MediaExtension {
    /// Routes one media-block child element (media, dcterms, georss, gml
    /// namespaces) to the matching codec; anything unrecognized in those
    /// namespaces is absorbed verbatim.
    pub fn absorb(&mut self, element: &Element) {
        match (element.namespace(), element.name()) {
            (Some(ns::MEDIA), "group") => self.groups.push(MediaGroup::from_element(element)),
            (Some(ns::MEDIA), "content") => {
                self.contents.push(MediaContent::from_element(element));
            }
            (Some(ns::MEDIA), "thumbnail") => {
                self.thumbnails.push(MediaThumbnail::from_element(element));
            }
            (Some(ns::MEDIA | ns::DUBLIN_CORE_TERMS | ns::GEORSS | ns::GML), _) => {
                self.extras.push(element.clone());
            }
            // Not part of the media block; the item dispatcher shouldn't
            // have routed it here, drop it.
            (namespace, name) => {
                trace!(?namespace, name, "dropping element outside the media block");
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
            && self.contents.is_empty()
            && self.thumbnails.is_empty()
            && self.extras.is_empty()
    }

    /// The node's own first declared thumbnail, per media-extension
    /// semantics.
    pub fn thumbnail(&self) -> Option<&MediaThumbnail> {
        self.thumbnails.first()
    }

    /// Appends every media child to the owning item's element.
    pub(crate) fn append_to(&self, element: &mut Element) {
        for group in &self.groups {
            element.push_child(group.to_element());
        }
        for content in &self.contents {
            element.push_child(content.to_element());
        }
        for thumbnail in &self.thumbnails {
            element.push_child(thumbnail.to_element());
        }
        for extra in &self.extras {
            element.push_child(extra.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_thumbnail_round_trip() {
        let thumbnail = MediaThumbnail {
            url: "https://example.com/t.jpg".to_string(),
            width: Some(75),
            height: Some(50),
            time: Some("12:05:01.123".to_string()),
        };
        assert_eq!(
            MediaThumbnail::from_element(&thumbnail.to_element()),
            thumbnail
        );
    }

    #[test]
    fn test_content_round_trip_with_nested_thumbnail() {
        let mut content = MediaContent::new("https://example.com/clip.mp4");
        content.media_type = Some("video/mp4".to_string());
        content.medium = Some("video".to_string());
        content.width = Some(640);
        content.height = Some(480);
        content
            .thumbnails
            .push(MediaThumbnail::new("https://example.com/poster.jpg"));
        assert_eq!(MediaContent::from_element(&content.to_element()), content);
    }

    #[test]
    fn test_effective_medium_priority() {
        // Declared medium wins over MIME type
        let mut content = MediaContent::new("https://example.com/x.bin");
        content.medium = Some("audio".to_string());
        content.media_type = Some("video/mp4".to_string());
        assert_eq!(content.effective_medium(), Some(Medium::Audio));

        // MIME type wins over URL extension
        let mut content = MediaContent::new("https://example.com/x.png");
        content.media_type = Some("video/mp4".to_string());
        assert_eq!(content.effective_medium(), Some(Medium::Video));

        // URL extension as last resort
        let content = MediaContent::new("https://example.com/x.png");
        assert_eq!(content.effective_medium(), Some(Medium::Image));
    }

    #[test]
    fn test_from_enclosure_view() {
        let enclosure = Enclosure::new("https://example.com/ep.mp3", 9000, "audio/mpeg");
        let content = MediaContent::from_enclosure(&enclosure);
        assert_eq!(content.url, "https://example.com/ep.mp3");
        assert_eq!(content.media_type.as_deref(), Some("audio/mpeg"));
        assert_eq!(content.medium.as_deref(), Some("audio"));
        assert_eq!(content.file_size, Some(9000));
    }

    #[test]
    fn test_group_thumbnail_prefers_own() {
        let mut group = MediaGroup::default();
        let mut content = MediaContent::new("https://example.com/a.mp4");
        content
            .thumbnails
            .push(MediaThumbnail::new("https://example.com/content-thumb.jpg"));
        group.add_content(content);
        assert_eq!(
            group.thumbnail().map(|t| t.url.as_str()),
            Some("https://example.com/content-thumb.jpg")
        );

        group
            .thumbnails
            .push(MediaThumbnail::new("https://example.com/own-thumb.jpg"));
        assert_eq!(
            group.thumbnail().map(|t| t.url.as_str()),
            Some("https://example.com/own-thumb.jpg")
        );
    }

    #[test]
    fn test_absorb_routes_by_name() {
        let mut media = MediaExtension::default();
        media.absorb(&Element::namespaced("group", ns::MEDIA));
        media.absorb(&Element::namespaced("content", ns::MEDIA));
        media.absorb(&Element::namespaced("thumbnail", ns::MEDIA));
        media.absorb(&Element::namespaced("rating", ns::MEDIA));
        media.absorb(&Element::namespaced("point", ns::GEORSS));
        assert_eq!(media.groups.len(), 1);
        assert_eq!(media.contents.len(), 1);
        assert_eq!(media.thumbnails.len(), 1);
        assert_eq!(media.extras.len(), 2);
    }

    #[test]
    fn test_absorb_ignores_foreign_namespace() {
        let mut media = MediaExtension::default();
        media.absorb(&Element::namespaced("link", ns::ATOM));
        media.absorb(&Element::new("title"));
        assert!(media.is_empty());
    }

    #[test]
    fn test_within_bounds_zero_is_unbounded() {
        let mut content = MediaContent::new("https://example.com/a.png");
        content.width = Some(800);
        content.height = Some(600);
        assert!(content.within_bounds(0, 0, 0, 0));
        assert!(content.within_bounds(640, 1024, 0, 0));
        assert!(!content.within_bounds(1000, 0, 0, 0));
        assert!(!content.within_bounds(0, 640, 0, 0));

        // Missing dimensions count as 0
        let bare = MediaContent::new("https://example.com/b.png");
        assert!(bare.within_bounds(0, 1024, 0, 0));
        assert!(!bare.within_bounds(1, 0, 0, 0));
    }
}
