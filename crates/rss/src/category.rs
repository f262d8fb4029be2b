// ABOUTME: Category codec shared by channel and item.
// ABOUTME: Text content is the tag, with an optional domain attribute.

use crate::xml_util::{non_empty, Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// A channel or item tag, optionally qualified by a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub text: String,
    pub domain: Option<String>,
}

impl Category {
    pub fn new(text: impl Into<String>) -> Category {
        Category {
            text: text.into(),
            domain: None,
        }
    }

    pub fn with_domain(text: impl Into<String>, domain: impl Into<String>) -> Category {
        Category {
            text: text.into(),
            domain: Some(domain.into()),
        }
    }
}

impl ElementCodec for Category {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("category", &self.text);
        if let Some(domain) = self.domain.as_deref().filter(|d| !d.is_empty()) {
            element.set_attr("domain", domain);
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.text = element.text().to_string();
        self.domain = element.attr("domain").and_then(non_empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_omitted_when_absent() {
        let element = Category::new("tech").to_element();
        assert_eq!(element.attr("domain"), None);
        assert_eq!(element.text(), "tech");
    }

    #[test]
    fn test_round_trip_with_domain() {
        let category = Category::with_domain("tech", "https://example.com/tags");
        let loaded = Category::from_element(&category.to_element());
        assert_eq!(loaded, category);
    }

    #[test]
    fn test_load_ignores_foreign_namespace() {
        let element = Element::namespaced("category", crate::ns::ATOM);
        let mut category = Category::new("keep");
        category.load(&element);
        assert_eq!(category.text, "keep");
    }
}
