// ABOUTME: Enclosure codec for attached media file references on items.
// ABOUTME: Carries the medium-filter match rule used by the selection queries.

use crate::medium::{classify_mime, classify_url, Medium};
use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// A single attached media file: URL, byte length, MIME type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    pub length: u64,
    pub mime_type: String,
}

impl Enclosure {
    pub fn new(url: impl Into<String>, length: u64, mime_type: impl Into<String>) -> Enclosure {
        Enclosure {
            url: url.into(),
            length,
            mime_type: mime_type.into(),
        }
    }

    /// The medium this enclosure is classified into: MIME type first,
    /// URL extension when the type is missing or unclassifiable.
    pub fn medium(&self) -> Option<Medium> {
        classify_mime(&self.mime_type).or_else(|| classify_url(&self.url))
    }

    /// Filter rule for the selection queries: an exact case-insensitive MIME
    /// match, or a medium classification match, or match-all when neither
    /// filter is supplied.
    pub(crate) fn matches(&self, medium: Option<Medium>, mime_type: Option<&str>) -> bool {
        if medium.is_none() && mime_type.is_none() {
            return true;
        }
        if let Some(wanted) = mime_type {
            if !self.mime_type.is_empty() && self.mime_type.eq_ignore_ascii_case(wanted) {
                return true;
            }
        }
        if let Some(wanted) = medium {
            if self.medium() == Some(wanted) {
                return true;
            }
        }
        false
    }
}

impl ElementCodec for Enclosure {
    fn to_element(&self) -> Element {
        // url/length/type are all required by the wire format
        let mut element = Element::new("enclosure");
        element.set_attr("url", &self.url);
        element.set_attr("length", self.length);
        element.set_attr("type", &self.mime_type);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.url = element.attr_text("url");
        self.length = element.attr_u64("length");
        self.mime_type = element.attr_text("type");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let enclosure = Enclosure::new("https://example.com/ep.mp3", 123456, "audio/mpeg");
        assert_eq!(Enclosure::from_element(&enclosure.to_element()), enclosure);
    }

    #[test]
    fn test_medium_falls_back_to_url_extension() {
        let enclosure = Enclosure::new("https://example.com/cover.png", 0, "");
        assert_eq!(enclosure.medium(), Some(Medium::Image));
    }

    #[test]
    fn test_matches_exact_mime_case_insensitive() {
        let enclosure = Enclosure::new("https://example.com/ep.mp3", 0, "audio/MPEG");
        assert!(enclosure.matches(None, Some("audio/mpeg")));
        assert!(!enclosure.matches(None, Some("audio/mp4")));
    }

    #[test]
    fn test_matches_all_without_filters() {
        let enclosure = Enclosure::default();
        assert!(enclosure.matches(None, None));
    }

    #[test]
    fn test_malformed_length_is_zero() {
        let mut element = Element::new("enclosure");
        element.set_attr("url", "https://example.com/a.mp3");
        element.set_attr("length", "big");
        let enclosure = Enclosure::from_element(&element);
        assert_eq!(enclosure.length, 0);
    }
}
