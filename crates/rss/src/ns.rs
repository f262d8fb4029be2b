// ABOUTME: Namespace URI constants for RSS extension modules.
// ABOUTME: Maps each namespace to the canonical prefix used on the wire.

/// Atom syndication namespace.
pub const ATOM: &str = "http://www.w3.org/2005/Atom";

/// Dublin Core elements namespace.
pub const DUBLIN_CORE: &str = "http://purl.org/dc/elements/1.1/";

/// Dublin Core terms namespace.
pub const DUBLIN_CORE_TERMS: &str = "http://purl.org/dc/terms/";

/// Media RSS namespace.
pub const MEDIA: &str = "http://search.yahoo.com/mrss/";

/// GeoRSS namespace.
pub const GEORSS: &str = "http://www.georss.org/georss";

/// GML namespace (used inside georss:where).
pub const GML: &str = "http://www.opengis.net/gml";

/// RSS 1.0 content module namespace (content:encoded).
pub const CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";

/// Slash module namespace (slash:comments).
pub const SLASH: &str = "http://purl.org/rss/1.0/modules/slash/";

/// Creative Commons license module namespace.
pub const CREATIVE_COMMONS: &str = "http://backend.userland.com/creativeCommonsRssModule";

/// Canonical prefixes, in the order xmlns declarations are emitted.
const PREFIXES: &[(&str, &str)] = &[
    (ATOM, "atom"),
    (DUBLIN_CORE, "dc"),
    (DUBLIN_CORE_TERMS, "dcterms"),
    (MEDIA, "media"),
    (GEORSS, "georss"),
    (GML, "gml"),
    (CONTENT, "content"),
    (SLASH, "slash"),
    (CREATIVE_COMMONS, "creativeCommons"),
];

/// Returns the canonical wire prefix for a namespace URI, if known.
pub fn prefix_for(uri: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(ns, _)| *ns == uri)
        .map(|(_, prefix)| *prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(prefix_for(ATOM), Some("atom"));
        assert_eq!(prefix_for(MEDIA), Some("media"));
        assert_eq!(prefix_for(CREATIVE_COMMONS), Some("creativeCommons"));
    }

    #[test]
    fn test_unknown_namespace() {
        assert_eq!(prefix_for("http://example.com/unknown"), None);
    }
}
