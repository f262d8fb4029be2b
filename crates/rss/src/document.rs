// ABOUTME: Aggregate feed document: the rss wrapper element around one channel.
// ABOUTME: Declares extension namespaces on the root and drives full-document load/serialize.

use crate::channel::Channel;
use crate::error::RssError;
use crate::ns;
use crate::validate;
use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// A complete RSS document: the rss wrapper and its single channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: String,
    pub channel: Channel,
}

impl Default for Document {
    fn default() -> Document {
        Document {
            version: "2.0".to_string(),
            channel: Channel::default(),
        }
    }
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Document {
        Document {
            channel: Channel::new(title, link, description),
            ..Document::default()
        }
    }

    /// Parses a feed document. Accepts an rss wrapper or a bare channel root;
    /// anything else is NotRss. Within the channel the loader is tolerant -
    /// only malformed XML itself is an error.
    pub fn parse(xml: &str) -> Result<Document, RssError> {
        let root = Element::parse(xml)?;
        let (version, channel_element) = match root.name() {
            "rss" => {
                let channel = root
                    .child("channel")
                    .ok_or_else(|| RssError::NotRss("rss element has no channel".to_string()))?;
                let version = root
                    .attr("version")
                    .filter(|v| !v.is_empty())
                    .unwrap_or("2.0");
                (version.to_string(), channel)
            }
            "channel" if root.namespace().is_none() => ("2.0".to_string(), &root),
            other => {
                return Err(RssError::NotRss(format!(
                    "unexpected root element <{}>",
                    other
                )));
            }
        };
        Ok(Document {
            version,
            channel: Channel::from_element(channel_element),
        })
    }

    /// Serializes the document: XML declaration, rss wrapper with xmlns
    /// declarations for every extension namespace the tree uses, channel.
    pub fn to_xml_string(&self) -> Result<String, RssError> {
        let channel = self.channel.to_element();

        let mut used = Vec::new();
        channel.collect_namespaces(&mut used);

        let mut root = Element::new("rss");
        root.set_attr("version", &self.version);
        for uri in used {
            if let Some(prefix) = ns::prefix_for(uri) {
                root.set_attr(&format!("xmlns:{}", prefix), uri);
            }
        }
        root.push_child(channel);
        root.to_xml_document()
    }

    /// Opt-in strict mode: rejects structurally non-conformant documents the
    /// tolerant codec would happily serialize.
    pub fn validate_strict(&self) -> Result<(), RssError> {
        let issues = validate::validate(self);
        if issues.is_empty() {
            return Ok(());
        }
        let summary = issues
            .iter()
            .map(|issue| issue.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(RssError::invalid(summary))
    }
}
