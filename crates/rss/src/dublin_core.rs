// ABOUTME: dc:creator codec for Dublin Core author attribution on items.
// ABOUTME: Items may carry any number of creators, in document order.

use crate::ns;
use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// One dc:creator attribution line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DublinCoreCreator {
    pub creator: String,
}

impl DublinCoreCreator {
    pub fn new(creator: impl Into<String>) -> DublinCoreCreator {
        DublinCoreCreator {
            creator: creator.into(),
        }
    }
}

impl ElementCodec for DublinCoreCreator {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("creator", ns::DUBLIN_CORE);
        element.set_text(&self.creator);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::DUBLIN_CORE) {
            return;
        }
        self.creator = element.text().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let creator = DublinCoreCreator::new("Ada Lovelace");
        assert_eq!(DublinCoreCreator::from_element(&creator.to_element()), creator);
    }
}
