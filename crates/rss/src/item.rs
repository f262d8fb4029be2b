// ABOUTME: Composite item codec: core fields, extension dispatch, and selection queries.
// ABOUTME: Queries pick effective descriptions, thumbnails, and content items from extensions.

use crate::atom::AtomLink;
use crate::category::Category;
use crate::content::ContentEncoded;
use crate::creative_commons::CreativeCommonsLicense;
use crate::dublin_core::DublinCoreCreator;
use crate::enclosure::Enclosure;
use crate::guid::Guid;
use crate::media::{MediaContent, MediaExtension, MediaThumbnail};
use crate::medium::Medium;
use crate::ns;
use crate::slash::SlashComments;
use crate::source::Source;
use crate::time_parse::{format_rfc822, parse_rfc822};
use crate::xml_util::{non_empty, Element, ElementCodec};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which side the effective-description lookup should favor when an item
/// carries both a description and a content:encoded body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptionSource {
    #[default]
    PreferContentEncoded,
    PreferDescription,
}

/// One discrete feed entry. RSS 2.0 expects at least one of
/// title/description; the codec leaves that to the caller (see the validate
/// layer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub author: Option<String>,
    pub comments: Option<String>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    pub categories: Vec<Category>,
    pub enclosures: Vec<Enclosure>,
    pub guid: Option<Guid>,
    pub source: Option<Source>,
    pub atom_link: Option<AtomLink>,
    pub content_encoded: Option<ContentEncoded>,
    pub creative_commons: Option<CreativeCommonsLicense>,
    pub creators: Vec<DublinCoreCreator>,
    pub slash_comments: Option<SlashComments>,
    pub media: MediaExtension,
}

impl Item {
    pub fn new() -> Item {
        Item::default()
    }

    pub fn with_title(title: impl Into<String>) -> Item {
        Item {
            title: Some(title.into()),
            ..Item::default()
        }
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn add_enclosure(&mut self, enclosure: Enclosure) {
        self.enclosures.push(enclosure);
    }

    pub fn set_guid(&mut self, guid: Guid) {
        self.guid = Some(guid);
    }

    pub fn set_source(&mut self, source: Source) {
        self.source = Some(source);
    }

    pub fn set_atom_link(&mut self, link: AtomLink) {
        self.atom_link = Some(link);
    }

    pub fn set_content_encoded(&mut self, encoded: impl Into<String>) {
        self.content_encoded = Some(ContentEncoded::new(encoded));
    }

    pub fn set_creative_commons(&mut self, license: impl Into<String>) {
        self.creative_commons = Some(CreativeCommonsLicense::new(license));
    }

    pub fn add_creator(&mut self, creator: impl Into<String>) {
        self.creators.push(DublinCoreCreator::new(creator));
    }

    pub fn set_slash_comments(&mut self, comments: u32) {
        self.slash_comments = Some(SlashComments::new(comments));
    }

    pub fn add_media_content(&mut self, content: MediaContent) {
        self.media.contents.push(content);
    }

    pub fn add_media_thumbnail(&mut self, thumbnail: MediaThumbnail) {
        self.media.thumbnails.push(thumbnail);
    }

    // ------------------------------------------------------------------
    // Selection queries (read-only, total)
    // ------------------------------------------------------------------

    /// Scans the enclosure list in document order, returning every match for
    /// the given filters (match-all when both are None).
    pub fn enclosures_matching(
        &self,
        medium: Option<Medium>,
        mime_type: Option<&str>,
    ) -> Vec<&Enclosure> {
        self.enclosures
            .iter()
            .filter(|enclosure| enclosure.matches(medium, mime_type))
            .collect()
    }

    /// The stop-after-first form of the enclosure scan.
    pub fn first_enclosure(
        &self,
        medium: Option<Medium>,
        mime_type: Option<&str>,
    ) -> Option<&Enclosure> {
        self.enclosures
            .iter()
            .find(|enclosure| enclosure.matches(medium, mime_type))
    }

    /// The item body under the given fallback policy: exactly one of the two
    /// non-empty values, or the empty string when both are empty.
    pub fn effective_description(&self, favor: DescriptionSource) -> &str {
        let description = self.description.as_deref().unwrap_or("");
        let encoded = self
            .content_encoded
            .as_ref()
            .map(|c| c.encoded.as_str())
            .unwrap_or("");
        match favor {
            DescriptionSource::PreferContentEncoded => {
                if encoded.is_empty() {
                    description
                } else {
                    encoded
                }
            }
            DescriptionSource::PreferDescription => {
                if description.is_empty() {
                    encoded
                } else {
                    description
                }
            }
        }
    }

    /// The item's own first declared media thumbnail.
    pub fn thumbnail(&self) -> Option<&MediaThumbnail> {
        self.media.thumbnail()
    }

    /// Pre-order thumbnail search favoring the shallowest node: the item's
    /// own thumbnails, then its loose media contents, then each media group
    /// (own thumbnails before that group's contents).
    pub fn thumbnail_deep(&self) -> Option<&MediaThumbnail> {
        self.media
            .thumbnail()
            .or_else(|| {
                self.media
                    .contents
                    .iter()
                    .find_map(|content| content.thumbnails.first())
            })
            .or_else(|| self.media.groups.iter().find_map(|group| group.thumbnail()))
    }

    /// The first media content item matching the filters. When
    /// `include_enclosures` is set the enclosure scan runs first and a hit is
    /// returned as a synthesized content view; otherwise (or on a miss) the
    /// item's own content items are searched, then each group's, in document
    /// order.
    pub fn first_content_item(
        &self,
        medium: Option<Medium>,
        mime_type: Option<&str>,
        include_enclosures: bool,
    ) -> Option<MediaContent> {
        if include_enclosures {
            if let Some(enclosure) = self.first_enclosure(medium, mime_type) {
                return Some(MediaContent::from_enclosure(enclosure));
            }
        }
        self.media
            .contents
            .iter()
            .find(|content| content.matches(medium, mime_type))
            .or_else(|| {
                self.media.groups.iter().find_map(|group| {
                    group
                        .contents
                        .iter()
                        .find(|content| content.matches(medium, mime_type))
                })
            })
            .cloned()
    }

    /// Image-medium content items within the given dimension bounds
    /// (0 = unbounded on that side), own contents then each group's.
    pub fn image_items(
        &self,
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    ) -> Vec<&MediaContent> {
        let matches = move |content: &&MediaContent| {
            content.matches(Some(Medium::Image), None)
                && content.within_bounds(min_width, max_width, min_height, max_height)
        };
        self.media
            .contents
            .iter()
            .filter(&matches)
            .chain(
                self.media
                    .groups
                    .iter()
                    .flat_map(|group| group.contents.iter().filter(&matches)),
            )
            .collect()
    }

    /// First image-medium content item within the bounds.
    pub fn image_item(
        &self,
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    ) -> Option<&MediaContent> {
        self.image_items(min_width, max_width, min_height, max_height)
            .into_iter()
            .next()
    }
}

impl ElementCodec for Item {
    fn to_element(&self) -> Element {
        let mut element = Element::new("item");
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            element.add_child("title", title);
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            element.add_child("description", description);
        }
        if let Some(link) = self.link.as_deref().filter(|l| !l.is_empty()) {
            element.add_child("link", link);
        }
        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            element.add_child("author", author);
        }
        if let Some(comments) = self.comments.as_deref().filter(|c| !c.is_empty()) {
            element.add_child("comments", comments);
        }
        if let Some(pub_date) = &self.pub_date {
            element.add_child("pubDate", format_rfc822(pub_date));
        }
        for category in &self.categories {
            element.push_child(category.to_element());
        }
        for enclosure in &self.enclosures {
            element.push_child(enclosure.to_element());
        }
        if let Some(guid) = &self.guid {
            element.push_child(guid.to_element());
        }
        if let Some(source) = &self.source {
            element.push_child(source.to_element());
        }
        if let Some(atom_link) = &self.atom_link {
            element.push_child(atom_link.to_element());
        }
        if let Some(content_encoded) = &self.content_encoded {
            element.push_child(content_encoded.to_element());
        }
        if let Some(creative_commons) = &self.creative_commons {
            element.push_child(creative_commons.to_element());
        }
        for creator in &self.creators {
            element.push_child(creator.to_element());
        }
        if let Some(slash_comments) = &self.slash_comments {
            element.push_child(slash_comments.to_element());
        }
        self.media.append_to(&mut element);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        for child in element.children() {
            match child.namespace() {
                None => match child.name() {
                    "title" => self.title = non_empty(child.text()),
                    "description" => self.description = non_empty(child.text()),
                    "link" => self.link = non_empty(child.text()),
                    "author" => self.author = non_empty(child.text()),
                    "comments" => self.comments = non_empty(child.text()),
                    "pubDate" => self.pub_date = parse_rfc822(child.text()),
                    "category" => self.categories.push(Category::from_element(child)),
                    "enclosure" => self.enclosures.push(Enclosure::from_element(child)),
                    "guid" => self.guid = Some(Guid::from_element(child)),
                    "source" => self.source = Some(Source::from_element(child)),
                    name => trace!(name, "dropping unrecognized item element"),
                },
                Some(ns::ATOM) if child.name() == "link" => {
                    self.atom_link = Some(AtomLink::from_element(child));
                }
                Some(ns::CONTENT) if child.name() == "encoded" => {
                    self.content_encoded = Some(ContentEncoded::from_element(child));
                }
                Some(ns::CREATIVE_COMMONS) if child.name() == "license" => {
                    self.creative_commons = Some(CreativeCommonsLicense::from_element(child));
                }
                Some(ns::DUBLIN_CORE) if child.name() == "creator" => {
                    self.creators.push(DublinCoreCreator::from_element(child));
                }
                Some(ns::SLASH) if child.name() == "comments" => {
                    self.slash_comments = Some(SlashComments::from_element(child));
                }
                Some(ns::MEDIA | ns::DUBLIN_CORE_TERMS | ns::GEORSS | ns::GML) => {
                    self.media.absorb(child);
                }
                Some(namespace) => {
                    trace!(namespace, name = child.name(), "dropping unrecognized item extension");
                }
            }
        }
    }
}
