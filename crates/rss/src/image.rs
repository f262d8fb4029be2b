// ABOUTME: Channel image codec for the feed logo element.
// ABOUTME: url/title/link are required children, description and dimensions optional.

use crate::xml_util::{non_empty, Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The feed logo: an image with its target link and title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelImage {
    pub url: String,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ChannelImage {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> ChannelImage {
        ChannelImage {
            url: url.into(),
            title: title.into(),
            link: link.into(),
            ..ChannelImage::default()
        }
    }
}

impl ElementCodec for ChannelImage {
    fn to_element(&self) -> Element {
        let mut element = Element::new("image");
        element.add_child("url", &self.url);
        element.add_child("title", &self.title);
        element.add_child("link", &self.link);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            element.add_child("description", description);
        }
        if let Some(width) = self.width.filter(|w| *w > 0) {
            element.add_child("width", width);
        }
        if let Some(height) = self.height.filter(|h| *h > 0) {
            element.add_child("height", height);
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.url = element.child_text("url");
        self.title = element.child_text("title");
        self.link = element.child_text("link");
        self.description = non_empty(&element.child_text("description"));
        self.width = Some(element.child_u32("width")).filter(|w| *w > 0);
        self.height = Some(element.child_u32("height")).filter(|h| *h > 0);
    }
}
