// ABOUTME: Guid codec for the item's globally unique identifier.
// ABOUTME: isPermaLink defaults to true on the wire and is only written when false.

use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// An item's unique identifier, optionally usable as a permalink URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guid {
    pub value: String,
    pub is_permalink: bool,
}

impl Default for Guid {
    fn default() -> Guid {
        Guid {
            value: String::new(),
            is_permalink: true,
        }
    }
}

impl Guid {
    /// A permalink guid (the wire default).
    pub fn permalink(value: impl Into<String>) -> Guid {
        Guid {
            value: value.into(),
            is_permalink: true,
        }
    }

    /// An opaque, non-URL guid.
    pub fn opaque(value: impl Into<String>) -> Guid {
        Guid {
            value: value.into(),
            is_permalink: false,
        }
    }
}

impl ElementCodec for Guid {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("guid", &self.value);
        if !self.is_permalink {
            element.set_attr("isPermaLink", "false");
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.value = element.text().to_string();
        self.is_permalink = !element
            .attr("isPermaLink")
            .is_some_and(|v| v.eq_ignore_ascii_case("false"));
    }
}
