// ABOUTME: creativeCommons:license codec for channel and item licensing.
// ABOUTME: A single license URL in the Creative Commons module namespace.

use crate::ns;
use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The license the channel or item content is published under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreativeCommonsLicense {
    pub license: String,
}

impl CreativeCommonsLicense {
    pub fn new(license: impl Into<String>) -> CreativeCommonsLicense {
        CreativeCommonsLicense {
            license: license.into(),
        }
    }
}

impl ElementCodec for CreativeCommonsLicense {
    fn to_element(&self) -> Element {
        let mut element = Element::namespaced("license", ns::CREATIVE_COMMONS);
        element.set_text(&self.license);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace() != Some(ns::CREATIVE_COMMONS) {
            return;
        }
        self.license = element.text().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let license =
            CreativeCommonsLicense::new("https://creativecommons.org/licenses/by-sa/4.0/");
        assert_eq!(
            CreativeCommonsLicense::from_element(&license.to_element()),
            license
        );
    }

    #[test]
    fn test_atom_namespace_license_is_ignored() {
        let mut element = Element::namespaced("license", ns::ATOM);
        element.set_text("https://example.com/license");
        let license = CreativeCommonsLicense::from_element(&element);
        assert_eq!(license.license, "");
    }
}
