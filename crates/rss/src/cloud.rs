// ABOUTME: Cloud codec for the rssCloud update-notification endpoint.
// ABOUTME: All five attributes are required by the wire format and written unconditionally.

use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// An rssCloud endpoint a channel can publish update pings to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub domain: String,
    pub port: u32,
    pub path: String,
    pub register_procedure: String,
    pub protocol: String,
}

impl Cloud {
    pub fn new(
        domain: impl Into<String>,
        port: u32,
        path: impl Into<String>,
        register_procedure: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Cloud {
        Cloud {
            domain: domain.into(),
            port,
            path: path.into(),
            register_procedure: register_procedure.into(),
            protocol: protocol.into(),
        }
    }
}

impl ElementCodec for Cloud {
    fn to_element(&self) -> Element {
        let mut element = Element::new("cloud");
        element.set_attr("domain", &self.domain);
        element.set_attr("port", self.port);
        element.set_attr("path", &self.path);
        element.set_attr("registerProcedure", &self.register_procedure);
        element.set_attr("protocol", &self.protocol);
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.domain = element.attr_text("domain");
        self.port = element.attr_u32("port");
        self.path = element.attr_text("path");
        self.register_procedure = element.attr_text("registerProcedure");
        self.protocol = element.attr_text("protocol");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let cloud = Cloud::new(
            "rpc.example.com",
            80,
            "/RPC2",
            "pingMe",
            "xml-rpc",
        );
        assert_eq!(Cloud::from_element(&cloud.to_element()), cloud);
    }

    #[test]
    fn test_unparseable_port_is_zero() {
        let mut element = Element::new("cloud");
        element.set_attr("port", "eighty");
        let cloud = Cloud::from_element(&element);
        assert_eq!(cloud.port, 0);
    }
}
