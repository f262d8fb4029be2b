// ABOUTME: slash:comments codec for the external comment count on items.
// ABOUTME: A single integer in the Slash module namespace.

use crate::ns;
use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The number of comments an item has accumulated elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlashComments {
    pub comments: u32,
}

impl SlashComments {
    pub fn new(comments: u32) -> SlashComments {
        SlashComments { comments }
    }
}

impl ElementCodec for SlashComments {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("comments", ns::SLASH);
        element.set_text(self.comments.to_string());
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::SLASH) {
            return;
        }
        self.comments = element.text().trim().parse().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let comments = SlashComments::new(42);
        assert_eq!(SlashComments::from_element(&comments.to_element()), comments);
    }

    #[test]
    fn test_malformed_count_is_zero() {
        let mut element = Element::namespaced("comments", ns::SLASH);
        element.set_text("many");
        assert_eq!(SlashComments::from_element(&element).comments, 0);
    }
}
