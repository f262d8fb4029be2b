// ABOUTME: Atom link codec for alternate-representation links on channels and items.
// ABOUTME: Lives in the Atom namespace; href is required, everything else optional.

use crate::ns;
use crate::xml_util::{non_empty, Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// An atom:link element, most commonly the rel="self" feed link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomLink {
    pub href: String,
    pub rel: Option<String>,
    pub media_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    pub length: Option<u64>,
}

impl AtomLink {
    pub fn new(href: impl Into<String>) -> AtomLink {
        AtomLink {
            href: href.into(),
            ..AtomLink::default()
        }
    }

    /// The conventional rel="self" link back to the feed itself.
    pub fn self_link(href: impl Into<String>) -> AtomLink {
        AtomLink {
            href: href.into(),
            rel: Some("self".to_string()),
            media_type: Some("application/rss+xml".to_string()),
            ..AtomLink::default()
        }
    }
}

impl ElementCodec for AtomLink {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("link", ns::ATOM);
        element.set_attr("href", &self.href);
        if let Some(rel) = self.rel.as_deref().filter(|v| !v.is_empty()) {
            element.set_attr("rel", rel);
        }
        if let Some(media_type) = self.media_type.as_deref().filter(|v| !v.is_empty()) {
            element.set_attr("type", media_type);
        }
        if let Some(hreflang) = self.hreflang.as_deref().filter(|v| !v.is_empty()) {
            element.set_attr("hreflang", hreflang);
        }
        if let Some(title) = self.title.as_deref().filter(|v| !v.is_empty()) {
            element.set_attr("title", title);
        }
        if let Some(length) = self.length.filter(|l| *l > 0) {
            element.set_attr("length", length);
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::ATOM) {
            return;
        }
        self.href = element.attr_text("href");
        self.rel = element.attr("rel").and_then(non_empty);
        self.media_type = element.attr("type").and_then(non_empty);
        self.hreflang = element.attr("hreflang").and_then(non_empty);
        self.title = element.attr("title").and_then(non_empty);
        self.length = Some(element.attr_u64("length")).filter(|l| *l > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_href_written_by_default() {
        let element = AtomLink::new("https://example.com/feed.xml").to_element();
        assert_eq!(element.attrs().count(), 1);
        assert_eq!(element.namespace(), Some(ns::ATOM));
    }

    #[test]
    fn test_self_link_round_trip() {
        let link = AtomLink::self_link("https://example.com/feed.xml");
        assert_eq!(AtomLink::from_element(&link.to_element()), link);
    }

    #[test]
    fn test_load_requires_atom_namespace() {
        let mut foreign = Element::new("link");
        foreign.set_attr("href", "https://example.com");
        let link = AtomLink::from_element(&foreign);
        assert_eq!(link.href, "");
    }
}
