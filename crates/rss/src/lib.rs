// ABOUTME: RSS 2.0 object model and bidirectional XML codec library.
// ABOUTME: Provides typed entities, namespace-aware load/serialize, and selection queries.

pub mod atom;
pub mod category;
pub mod channel;
pub mod cloud;
pub mod content;
pub mod creative_commons;
pub mod document;
pub mod dublin_core;
pub mod enclosure;
pub mod error;
pub mod guid;
pub mod image;
pub mod item;
pub mod media;
pub mod medium;
pub mod ns;
pub mod skip;
pub mod slash;
pub mod source;
pub mod text_input;
pub mod time_parse;
pub mod validate;
pub mod xml_util;

pub use atom::AtomLink;
pub use category::Category;
pub use channel::{Channel, DEFAULT_GENERATOR};
pub use cloud::Cloud;
pub use content::ContentEncoded;
pub use creative_commons::CreativeCommonsLicense;
pub use document::Document;
pub use dublin_core::DublinCoreCreator;
pub use enclosure::Enclosure;
pub use error::RssError;
pub use guid::Guid;
pub use image::ChannelImage;
pub use item::{DescriptionSource, Item};
pub use media::{MediaContent, MediaExtension, MediaGroup, MediaThumbnail};
pub use medium::{classify_mime, classify_url, Medium};
pub use skip::{SkipDays, SkipHours, DAY_NAMES};
pub use slash::SlashComments;
pub use source::Source;
pub use text_input::TextInput;
pub use time_parse::{format_rfc822, parse_rfc822};
pub use validate::{validate, Issue};
pub use xml_util::{Element, ElementCodec};
