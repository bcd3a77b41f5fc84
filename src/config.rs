use serde::{Deserialize, Serialize};

use crate::{codec::Element, datatype::ByteOrder, datatype::DatatypeDescriptor};

/// Options applied when a container is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    /// Default byte order for datatypes built with [ContainerConfig::datatype].
    /// Default little-endian, regardless of host order.
    #[serde(default)]
    pub byte_order: ByteOrder,
    /// Replace an existing file at the path. Default true.
    /// When false, creating over an existing file fails.
    #[serde(default = "default_true")]
    pub truncate: bool,
    /// Flush file contents to disk when closing. Default true.
    #[serde(default = "default_true")]
    pub sync_on_close: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            truncate: default_true(),
            sync_on_close: default_true(),
        }
    }
}

impl ContainerConfig {
    pub fn from_json(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Datatype for `T` in the configured byte order.
    pub fn datatype<T: Element>(&self) -> DatatypeDescriptor {
        DatatypeDescriptor::of::<T>(self.byte_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ContainerConfig::from_json("{}").unwrap();
        assert_eq!(config, ContainerConfig::default());
        assert_eq!(config.byte_order, ByteOrder::LittleEndian);
        assert!(config.truncate);
        assert!(config.sync_on_close);
    }

    #[test]
    fn partial_json() {
        let config =
            ContainerConfig::from_json(r#"{"byteOrder": "big", "truncate": false}"#).unwrap();
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
        assert!(!config.truncate);
        assert!(config.sync_on_close);
        assert_eq!(config.datatype::<f32>().byte_order(), ByteOrder::BigEndian);
    }

    #[test]
    fn unknown_byte_order() {
        assert!(ContainerConfig::from_json(r#"{"byteOrder": "middle"}"#).is_err());
    }
}
