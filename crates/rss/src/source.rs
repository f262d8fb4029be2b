// ABOUTME: Source codec for the channel an item was republished from.
// ABOUTME: The url attribute points at the originating feed, the text names it.

use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The feed an item originally came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub title: String,
}

impl Source {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Source {
        Source {
            url: url.into(),
            title: title.into(),
        }
    }
}

impl ElementCodec for Source {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("source", &self.title);
        element.set_attr("url", &self.url);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.url = element.attr_text("url");
        self.title = element.text().to_string();
    }
}
