// ABOUTME: textInput codec for the channel's CGI search form element.
// ABOUTME: All four children are required by the wire format.

use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The rarely-used channel search form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

impl TextInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        name: impl Into<String>,
        link: impl Into<String>,
    ) -> TextInput {
        TextInput {
            title: title.into(),
            description: description.into(),
            name: name.into(),
            link: link.into(),
        }
    }
}

impl ElementCodec for TextInput {
    fn to_element(&self) -> Element {
        let mut element = Element::new("textInput");
        element.add_child("title", &self.title);
        element.add_child("description", &self.description);
        element.add_child("name", &self.name);
        element.add_child("link", &self.link);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.title = element.child_text("title");
        self.description = element.child_text("description");
        self.name = element.child_text("name");
        self.link = element.child_text("link");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let input = TextInput::new("Search", "Search the site", "q", "https://example.com/search");
        assert_eq!(TextInput::from_element(&input.to_element()), input);
    }
}
