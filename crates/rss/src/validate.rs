// ABOUTME: Opt-in strict validation over an already-built document graph.
// ABOUTME: The codec never calls this; callers wanting conformance checks do.

use crate::document::Document;
use crate::item::Item;
use crate::skip::DAY_NAMES;
use std::fmt;

/// One structural problem found in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Where the problem is, e.g. "channel" or "item[3]".
    pub location: String,
    pub message: String,
}

impl Issue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Issue {
        Issue {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Collects every structural violation in the document. Empty means valid.
pub fn validate(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    let channel = &document.channel;

    if channel.title.is_empty() {
        issues.push(Issue::new("channel", "title is required"));
    }
    if channel.link.is_empty() {
        issues.push(Issue::new("channel", "link is required"));
    }
    if channel.description.is_empty() {
        issues.push(Issue::new("channel", "description is required"));
    }

    if let Some(image) = &channel.image {
        if image.url.is_empty() || image.title.is_empty() || image.link.is_empty() {
            issues.push(Issue::new("channel/image", "url, title, and link are required"));
        }
    }
    if let Some(text_input) = &channel.text_input {
        if text_input.title.is_empty()
            || text_input.description.is_empty()
            || text_input.name.is_empty()
            || text_input.link.is_empty()
        {
            issues.push(Issue::new(
                "channel/textInput",
                "title, description, name, and link are required",
            ));
        }
    }
    for (index, cloud) in channel.clouds.iter().enumerate() {
        if cloud.domain.is_empty() || cloud.path.is_empty() || cloud.protocol.is_empty() {
            issues.push(Issue::new(
                format!("channel/cloud[{}]", index),
                "domain, path, and protocol are required",
            ));
        }
    }
    if let Some(skip_hours) = &channel.skip_hours {
        for hour in skip_hours.hours.iter().filter(|h| **h > 23) {
            issues.push(Issue::new(
                "channel/skipHours",
                format!("hour {} is out of range 0-23", hour),
            ));
        }
    }
    if let Some(skip_days) = &channel.skip_days {
        for day in skip_days
            .days
            .iter()
            .filter(|day| !DAY_NAMES.contains(&day.as_str()))
        {
            issues.push(Issue::new(
                "channel/skipDays",
                format!("\"{}\" is not a weekday name", day),
            ));
        }
    }

    for (index, item) in channel.items.iter().enumerate() {
        validate_item(item, index, &mut issues);
    }

    issues
}

fn validate_item(item: &Item, index: usize, issues: &mut Vec<Issue>) {
    let location = format!("item[{}]", index);

    let has_title = item.title.as_deref().is_some_and(|t| !t.is_empty());
    let has_description = item.description.as_deref().is_some_and(|d| !d.is_empty());
    if !has_title && !has_description {
        issues.push(Issue::new(
            location.clone(),
            "at least one of title or description is required",
        ));
    }

    for (enclosure_index, enclosure) in item.enclosures.iter().enumerate() {
        if enclosure.url.is_empty() {
            issues.push(Issue::new(
                format!("{}/enclosure[{}]", location, enclosure_index),
                "url is required",
            ));
        }
    }

    if let Some(guid) = &item.guid {
        if guid.value.is_empty() {
            issues.push(Issue::new(format!("{}/guid", location), "value is empty"));
        }
    }

    for (link_index, atom_link) in item.atom_link.iter().enumerate() {
        if atom_link.href.is_empty() {
            issues.push(Issue::new(
                format!("{}/atom:link[{}]", location, link_index),
                "href is required",
            ));
        }
    }
}
