// ABOUTME: content:encoded codec for the rich HTML body of an item.
// ABOUTME: A single text payload in the RSS 1.0 content module namespace.

use crate::ns;
use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The full HTML rendition of an item, richer than the plain description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEncoded {
    pub encoded: String,
}

impl ContentEncoded {
    pub fn new(encoded: impl Into<String>) -> ContentEncoded {
        ContentEncoded {
            encoded: encoded.into(),
        }
    }
}

impl ElementCodec for ContentEncoded {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("encoded", ns::CONTENT);
        element.set_text(&self.encoded);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::CONTENT) {
            return;
        }
        self.encoded = element.text().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let content = ContentEncoded::new("<p>Hello &amp; welcome</p>");
        assert_eq!(ContentEncoded::from_element(&content.to_element()), content);
    }

    #[test]
    fn test_namespace_guard() {
        let element = Element::with_text("encoded", "<p>ignored</p>");
        assert_eq!(ContentEncoded::from_element(&element).encoded, "");
    }
}
