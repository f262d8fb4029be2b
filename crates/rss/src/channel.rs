// ABOUTME: Composite channel codec: core metadata, sub-entities, extensions, and items.
// ABOUTME: Children are emitted in the fixed order feed readers expect.

use crate::atom::AtomLink;
use crate::category::Category;
use crate::cloud::Cloud;
use crate::creative_commons::CreativeCommonsLicense;
use crate::image::ChannelImage;
use crate::item::Item;
use crate::ns;
use crate::skip::{SkipDays, SkipHours};
use crate::text_input::TextInput;
use crate::time_parse::{format_rfc822, parse_rfc822};
use crate::xml_util::{non_empty, Element, ElementCodec};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Written as the generator when the caller supplies none.
pub const DEFAULT_GENERATOR: &str = "syndic-rss 0.1";

/// The single top-level feed metadata container; owns all items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub managing_editor: Option<String>,
    pub web_master: Option<String>,
    pub docs: Option<String>,
    pub ttl: Option<u32>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    pub last_build_date: Option<DateTime<FixedOffset>>,
    pub generator: Option<String>,
    pub categories: Vec<Category>,
    pub clouds: Vec<Cloud>,
    pub image: Option<ChannelImage>,
    pub text_input: Option<TextInput>,
    pub skip_hours: Option<SkipHours>,
    pub skip_days: Option<SkipDays>,
    pub atom_links: Vec<AtomLink>,
    pub creative_commons: Option<CreativeCommonsLicense>,
    pub items: Vec<Item>,
}

impl Channel {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Channel {
        Channel {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            ..Channel::default()
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn add_cloud(&mut self, cloud: Cloud) {
        self.clouds.push(cloud);
    }

    pub fn set_image(&mut self, image: ChannelImage) {
        self.image = Some(image);
    }

    pub fn set_text_input(&mut self, text_input: TextInput) {
        self.text_input = Some(text_input);
    }

    pub fn add_atom_link(&mut self, link: AtomLink) {
        self.atom_links.push(link);
    }

    pub fn set_creative_commons(&mut self, license: impl Into<String>) {
        self.creative_commons = Some(CreativeCommonsLicense::new(license));
    }

    /// Adds an hour to the skip window, creating it on first use.
    pub fn add_skip_hour(&mut self, hour: u32) {
        self.skip_hours
            .get_or_insert_with(SkipHours::default)
            .hours
            .push(hour);
    }

    /// Adds a day to the skip window, creating it on first use.
    pub fn add_skip_day(&mut self, day: impl Into<String>) {
        self.skip_days
            .get_or_insert_with(SkipDays::default)
            .days
            .push(day.into());
    }
}

impl ElementCodec for Channel {
    fn to_element(&self) -> Element {
        let mut element = Element::new("channel");
        // Required scalars, written unconditionally
        element.add_child("title", &self.title);
        element.add_child("link", &self.link);
        element.add_child("description", &self.description);
        // Optional scalars
        if let Some(language) = self.language.as_deref().filter(|v| !v.is_empty()) {
            element.add_child("language", language);
        }
        if let Some(copyright) = self.copyright.as_deref().filter(|v| !v.is_empty()) {
            element.add_child("copyright", copyright);
        }
        if let Some(managing_editor) = self.managing_editor.as_deref().filter(|v| !v.is_empty()) {
            element.add_child("managingEditor", managing_editor);
        }
        if let Some(web_master) = self.web_master.as_deref().filter(|v| !v.is_empty()) {
            element.add_child("webMaster", web_master);
        }
        if let Some(docs) = self.docs.as_deref().filter(|v| !v.is_empty()) {
            element.add_child("docs", docs);
        }
        if let Some(ttl) = self.ttl.filter(|t| *t > 0) {
            element.add_child("ttl", ttl);
        }
        // Dated fields
        if let Some(pub_date) = &self.pub_date {
            element.add_child("pubDate", format_rfc822(pub_date));
        }
        if let Some(last_build_date) = &self.last_build_date {
            element.add_child("lastBuildDate", format_rfc822(last_build_date));
        }
        // Repeatable core children
        for category in &self.categories {
            element.push_child(category.to_element());
        }
        for cloud in &self.clouds {
            element.push_child(cloud.to_element());
        }
        if let Some(image) = &self.image {
            element.push_child(image.to_element());
        }
        if let Some(text_input) = &self.text_input {
            element.push_child(text_input.to_element());
        }
        if let Some(skip_hours) = &self.skip_hours {
            element.push_child(skip_hours.to_element());
        }
        if let Some(skip_days) = &self.skip_days {
            element.push_child(skip_days.to_element());
        }
        // Generator, defaulted to the library identification
        let generator = self
            .generator
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(DEFAULT_GENERATOR);
        element.add_child("generator", generator);
        // Extension children
        for atom_link in &self.atom_links {
            element.push_child(atom_link.to_element());
        }
        if let Some(creative_commons) = &self.creative_commons {
            element.push_child(creative_commons.to_element());
        }
        // Nested items, in insertion order
        for item in &self.items {
            element.push_child(item.to_element());
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        for child in element.children() {
            match child.namespace() {
                None => match child.name() {
                    "title" => self.title = child.text().to_string(),
                    "link" => self.link = child.text().to_string(),
                    "description" => self.description = child.text().to_string(),
                    "language" => self.language = non_empty(child.text()),
                    "copyright" => self.copyright = non_empty(child.text()),
                    "managingEditor" => self.managing_editor = non_empty(child.text()),
                    "webMaster" => self.web_master = non_empty(child.text()),
                    "docs" => self.docs = non_empty(child.text()),
                    "generator" => self.generator = non_empty(child.text()),
                    "ttl" => self.ttl = child.text().trim().parse().ok().filter(|t| *t > 0),
                    "pubDate" => self.pub_date = parse_rfc822(child.text()),
                    "lastBuildDate" => self.last_build_date = parse_rfc822(child.text()),
                    "category" => self.categories.push(Category::from_element(child)),
                    "cloud" => self.clouds.push(Cloud::from_element(child)),
                    "image" => self.image = Some(ChannelImage::from_element(child)),
                    "textInput" => self.text_input = Some(TextInput::from_element(child)),
                    "skipHours" => self.skip_hours = Some(SkipHours::from_element(child)),
                    "skipDays" => self.skip_days = Some(SkipDays::from_element(child)),
                    "item" => self.items.push(Item::from_element(child)),
                    name => trace!(name, "dropping unrecognized channel element"),
                },
                Some(ns::ATOM) if child.name() == "link" => {
                    self.atom_links.push(AtomLink::from_element(child));
                }
                Some(ns::CREATIVE_COMMONS) if child.name() == "license" => {
                    self.creative_commons = Some(CreativeCommonsLicense::from_element(child));
                }
                Some(namespace) => {
                    trace!(
                        namespace,
                        name = child.name(),
                        "dropping unrecognized channel extension"
                    );
                }
            }
        }
    }
}
