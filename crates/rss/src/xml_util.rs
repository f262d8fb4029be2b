// ABOUTME: Owned XML element tree with namespace-aware parse and serialize.
// ABOUTME: Provides the total coercion accessors and codec trait every entity builds on.

use crate::error::RssError;
use crate::ns;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use quick_xml::writer::Writer;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Cursor;

/// A detached XML tree node: local name, optional namespace URI, attributes
/// in insertion order, children in document order, accumulated text content.
///
/// All accessors are total - absent children, absent attributes, and
/// unparseable numbers coerce to empty/zero rather than failing. That is what
/// keeps the tolerant-loader policy possible in the codecs above this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Creates an element in the default (no) namespace.
    pub fn new(name: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            ..Element::default()
        }
    }

    /// Creates a namespace-qualified element.
    pub fn namespaced(name: impl Into<String>, namespace: &str) -> Element {
        Element {
            name: name.into(),
            namespace: Some(namespace.to_string()),
            ..Element::default()
        }
    }

    /// Creates an element with text content in the default namespace.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            text: text.into(),
            ..Element::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends a pre-built child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a default-namespace child holding the value as text.
    /// Omits nothing itself - callers decide whether to call.
    pub fn add_child(&mut self, name: &str, value: impl Display) {
        self.children.push(Element::with_text(name, value.to_string()));
    }

    /// Appends a namespace-qualified child holding the value as text.
    pub fn add_child_ns(&mut self, name: &str, value: impl Display, namespace: &str) {
        let mut child = Element::namespaced(name, namespace);
        child.text = value.to_string();
        self.children.push(child);
    }

    /// Sets an attribute, replacing any previous value for the name.
    pub fn set_attr(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        for (key, existing) in &mut self.attributes {
            if key == name {
                *existing = value;
                return;
            }
        }
        self.attributes.push((name.to_string(), value));
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute text, empty string if absent.
    pub fn attr_text(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default().to_string()
    }

    /// Attribute as u32; absence and parse failure both yield 0.
    pub fn attr_u32(&self, name: &str) -> u32 {
        self.attr(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Attribute as u64; absence and parse failure both yield 0.
    pub fn attr_u64(&self, name: &str) -> u64 {
        self.attr(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Attribute as i64; absence and parse failure both yield 0.
    pub fn attr_i64(&self, name: &str) -> i64 {
        self.attr(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// First default-namespace child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.namespace.is_none() && child.name == name)
    }

    /// First child with the given local name in the given namespace.
    pub fn child_ns(&self, name: &str, namespace: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.namespace.as_deref() == Some(namespace) && child.name == name)
    }

    /// Child text, empty string if the child is absent or empty.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name)
            .map(|child| child.text.clone())
            .unwrap_or_default()
    }

    /// Child text as u32; absence and parse failure both yield 0.
    pub fn child_u32(&self, name: &str) -> u32 {
        self.child(name)
            .and_then(|child| child.text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Child text as i64; absence and parse failure both yield 0.
    pub fn child_i64(&self, name: &str) -> i64 {
        self.child(name)
            .and_then(|child| child.text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Parses an XML document into an element tree. Namespace prefixes are
    /// resolved to URIs; xmlns bindings are consumed by the resolver and not
    /// stored as attributes.
    pub fn parse(xml: &str) -> Result<Element, RssError> {
        let mut reader = NsReader::from_str(xml);

        let mut stack: Vec<Element> = Vec::new();
        loop {
            match reader.read_resolved_event() {
                Ok((resolve, Event::Start(start))) => {
                    stack.push(element_from_start(&resolve, &start));
                }
                Ok((resolve, Event::Empty(start))) => {
                    let element = element_from_start(&resolve, &start);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Ok((_, Event::Text(text))) => {
                    if let Some(top) = stack.last_mut() {
                        match text.xml_content() {
                            Ok(decoded) => top.text.push_str(&decoded),
                            Err(_) => top.text.push_str(&String::from_utf8_lossy(&text)),
                        }
                    }
                }
                Ok((_, Event::CData(data))) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Ok((_, Event::GeneralRef(entity))) => {
                    // Unknown entities are dropped; builtins and character
                    // references become text.
                    if let Some(top) = stack.last_mut() {
                        let name = String::from_utf8_lossy(&entity).into_owned();
                        if let Some(resolved) = resolve_entity(&name) {
                            top.text.push_str(&resolved);
                        }
                    }
                }
                Ok((_, Event::End(_))) => {
                    let Some(mut done) = stack.pop() else {
                        return Err(RssError::xml("unbalanced end tag"));
                    };
                    // Inter-element formatting whitespace is not content;
                    // trimming here (not per text event) keeps text that
                    // arrives split around entity references intact.
                    done.text = done.text.trim().to_string();
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => return Ok(done),
                    }
                }
                Ok((_, Event::Eof)) => {
                    return Err(RssError::xml("document ended before the root element closed"));
                }
                // Declarations, comments, processing instructions, doctype
                Ok(_) => {}
                Err(err) => return Err(RssError::xml(err)),
            }
        }
    }

    /// Serializes this element (and subtree) as an XML fragment.
    pub fn to_xml(&self) -> Result<String, RssError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        self.write_into(&mut writer)?;
        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(RssError::write)
    }

    /// Serializes this element as a full document with an XML declaration.
    pub fn to_xml_document(&self) -> Result<String, RssError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(RssError::write)?;
        self.write_into(&mut writer)?;
        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(RssError::write)
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), RssError> {
        // Known namespaces get their canonical prefix (declared on the root
        // by the document layer); anything else is written self-contained
        // with an inline default-namespace binding.
        let (qualified, inline_ns) = match self.namespace.as_deref() {
            Some(uri) => match ns::prefix_for(uri) {
                Some(prefix) => (format!("{}:{}", prefix, self.name), None),
                None => (self.name.clone(), Some(uri)),
            },
            None => (self.name.clone(), None),
        };

        let mut start = BytesStart::new(qualified.as_str());
        if let Some(uri) = inline_ns {
            start.push_attribute(("xmlns", uri));
        }
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_empty() {
            return writer
                .write_event(Event::Empty(start))
                .map_err(RssError::write);
        }

        writer
            .write_event(Event::Start(start))
            .map_err(RssError::write)?;
        if !self.text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&self.text)))
                .map_err(RssError::write)?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(qualified.as_str())))
            .map_err(RssError::write)
    }

    /// Collects every namespace URI used in the subtree, first use first.
    pub(crate) fn collect_namespaces<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(uri) = self.namespace.as_deref() {
            if !out.contains(&uri) {
                out.push(uri);
            }
        }
        for child in &self.children {
            child.collect_namespaces(out);
        }
    }
}

fn element_from_start(resolve: &ResolveResult, start: &BytesStart) -> Element {
    let mut element = Element {
        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        namespace: match resolve {
            ResolveResult::Bound(namespace) => {
                Some(String::from_utf8_lossy(namespace.0).into_owned())
            }
            _ => None,
        },
        ..Element::default()
    };
    for attr in start.attributes().flatten() {
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        element.attributes.push((key, value));
    }
    element
}

/// Resolves the five XML builtins and numeric character references.
fn resolve_entity(name: &str) -> Option<String> {
    match name {
        "amp" => Some("&".to_string()),
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "apos" => Some("'".to_string()),
        "quot" => Some("\"".to_string()),
        _ => {
            let rest = name.strip_prefix('#')?;
            let code = match rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => rest.parse::<u32>().ok()?,
            };
            char::from_u32(code).map(|c| c.to_string())
        }
    }
}

/// The encode/decode pair every feed entity implements.
///
/// `load` is guarded by a namespace check and silently no-ops when the
/// element's namespace doesn't match the entity's - that is the dispatch
/// safety net, not an error path.
pub trait ElementCodec {
    fn to_element(&self) -> Element;

    fn load(&mut self, element: &Element);

    fn from_element(element: &Element) -> Self
    where
        Self: Default + Sized,
    {
        let mut value = Self::default();
        value.load(element);
        value
    }
}

/// Some(trimmed-preserving string) when non-empty, None otherwise.
pub(crate) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_basic_tree() {
        let xml = r#"<channel><title>Feed</title><ttl>60</ttl></channel>"#;
        let root = Element::parse(xml).unwrap();
        assert_eq!(root.name(), "channel");
        assert_eq!(root.child_text("title"), "Feed");
        assert_eq!(root.child_u32("ttl"), 60);
        assert_eq!(root.child_text("missing"), "");
        assert_eq!(root.child_u32("missing"), 0);
    }

    #[test]
    fn test_parse_resolves_namespaces() {
        let xml = r#"<root xmlns:atom="http://www.w3.org/2005/Atom">
            <atom:link href="https://example.com/feed"/>
        </root>"#;
        let root = Element::parse(xml).unwrap();
        let link = root.child_ns("link", ns::ATOM).unwrap();
        assert_eq!(link.attr("href"), Some("https://example.com/feed"));
        // xmlns binding is consumed, not stored
        assert_eq!(root.attr("atom"), None);
        assert!(root.child("link").is_none());
    }

    #[test]
    fn test_parse_coercion_failures_yield_zero() {
        let xml = r#"<e n="abc"><ttl>sixty</ttl></e>"#;
        let root = Element::parse(xml).unwrap();
        assert_eq!(root.attr_u32("n"), 0);
        assert_eq!(root.child_i64("ttl"), 0);
    }

    #[test]
    fn test_parse_cdata_and_entities() {
        let xml = r#"<e><![CDATA[<p>body</p>]]> &amp; more</e>"#;
        let root = Element::parse(xml).unwrap();
        assert!(root.text().contains("<p>body</p>"));
        assert!(root.text().contains("&"));
    }

    #[test]
    fn test_parse_malformed_is_an_error() {
        assert!(Element::parse("<a><b></a>").is_err());
        assert!(Element::parse("<unclosed>").is_err());
    }

    #[test]
    fn test_write_escapes_text_and_attributes() {
        let mut element = Element::with_text("title", "Tom & Jerry <3");
        element.set_attr("domain", "a\"b");
        let xml = element.to_xml().unwrap();
        assert!(xml.contains("Tom &amp; Jerry &lt;3"));
        assert!(!xml.contains("Tom & Jerry"));
    }

    #[test]
    fn test_write_qualifies_known_namespaces() {
        let element = Element::namespaced("link", ns::ATOM);
        let xml = element.to_xml().unwrap();
        assert!(xml.contains("<atom:link"));
    }

    #[test]
    fn test_write_unknown_namespace_inline() {
        let element = Element::namespaced("thing", "http://example.com/unknown");
        let xml = element.to_xml().unwrap();
        assert!(xml.contains(r#"<thing xmlns="http://example.com/unknown"/>"#));
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let mut root = Element::new("channel");
        root.add_child("title", "Feed");
        let mut item = Element::new("item");
        item.add_child("title", "Post");
        item.add_child("description", "Tom & Jerry <3");
        root.push_child(item);

        let xml = root.to_xml().unwrap();
        let parsed = Element::parse(&xml).unwrap();
        assert_eq!(parsed, root);
    }

    #[test]
    fn test_namespaced_round_trip_with_root_declarations() {
        // Prefix bindings are declared by the document root; a fragment
        // carrying the declarations round-trips its namespaces.
        let xml = format!(
            r#"<root xmlns:dc="{}"><dc:creator>A. Author</dc:creator></root>"#,
            ns::DUBLIN_CORE
        );
        let parsed = Element::parse(&xml).unwrap();
        let creator = parsed.child_ns("creator", ns::DUBLIN_CORE).unwrap();
        assert_eq!(creator.text(), "A. Author");

        let mut rewritten_root = Element::new("root");
        rewritten_root.set_attr("xmlns:dc", ns::DUBLIN_CORE);
        rewritten_root.push_child(creator.clone());
        let rewritten = rewritten_root.to_xml().unwrap();
        let reparsed = Element::parse(&rewritten).unwrap();
        assert_eq!(
            reparsed.child_ns("creator", ns::DUBLIN_CORE),
            Some(creator)
        );
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut element = Element::new("e");
        element.set_attr("url", "a");
        element.set_attr("url", "b");
        assert_eq!(element.attr("url"), Some("b"));
        assert_eq!(element.attrs().count(), 1);
    }

    #[test]
    fn test_collect_namespaces_in_first_use_order() {
        let mut root = Element::new("channel");
        root.add_child_ns("creator", "x", ns::DUBLIN_CORE);
        root.add_child_ns("encoded", "y", ns::CONTENT);
        root.add_child_ns("creator", "z", ns::DUBLIN_CORE);
        let mut seen = Vec::new();
        root.collect_namespaces(&mut seen);
        assert_eq!(seen, vec![ns::DUBLIN_CORE, ns::CONTENT]);
    }
}
