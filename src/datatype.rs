use serde::{Deserialize, Serialize};

use crate::codec::Element;

/// Class of the values a datatype describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// Fixed-width signed integer.
    Integer,
    /// IEEE 754 floating point.
    Float,
}

/// Order of the bytes within each stored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    #[default]
    #[serde(rename = "little")]
    LittleEndian,
    #[serde(rename = "big")]
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::native()
    }
}

/// Describes how the raw bytes of a dataset are interpreted as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatatypeDescriptor {
    class: ClassKind,
    byte_order: ByteOrder,
    size: usize,
}

impl DatatypeDescriptor {
    /// Fails with [InvalidDatatype](crate::Error::InvalidDatatype)
    /// if the class cannot be stored with the given element size.
    pub fn new(class: ClassKind, size: usize, byte_order: ByteOrder) -> crate::Result<Self> {
        let valid = match class {
            ClassKind::Integer => matches!(size, 1 | 2 | 4 | 8),
            ClassKind::Float => matches!(size, 4 | 8),
        };
        if !valid {
            return Err(crate::Error::InvalidDatatype(format!(
                "{class:?} elements cannot be {size} bytes wide"
            )));
        }
        Ok(Self {
            class,
            byte_order,
            size,
        })
    }

    /// Descriptor matching a native element type, stored in the given order.
    pub fn of<T: Element>(byte_order: ByteOrder) -> Self {
        Self {
            class: T::CLASS,
            byte_order,
            size: T::SIZE,
        }
    }

    pub fn class(&self) -> ClassKind {
        self.class
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Element size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Name of the type as written to the container index, e.g. `int32`.
    pub fn type_name(&self) -> &'static str {
        match (self.class, self.size) {
            (ClassKind::Integer, 1) => "int8",
            (ClassKind::Integer, 2) => "int16",
            (ClassKind::Integer, 4) => "int32",
            (ClassKind::Integer, 8) => "int64",
            (ClassKind::Float, 4) => "float32",
            (ClassKind::Float, 8) => "float64",
            // unreachable through `new` and `of`
            _ => "unknown",
        }
    }

    /// Inverse of [type_name](Self::type_name).
    pub fn from_type_name(name: &str, byte_order: ByteOrder) -> crate::Result<Self> {
        let (class, size) = match name {
            "int8" => (ClassKind::Integer, 1),
            "int16" => (ClassKind::Integer, 2),
            "int32" => (ClassKind::Integer, 4),
            "int64" => (ClassKind::Integer, 8),
            "float32" => (ClassKind::Float, 4),
            "float64" => (ClassKind::Float, 8),
            s => {
                return Err(crate::Error::InvalidDatatype(format!(
                    "unsupported data type: {s}"
                )));
            }
        };
        Self::new(class, size, byte_order)
    }

    /// Whether values of `T` can be transferred to or from this datatype.
    pub(crate) fn matches<T: Element>(&self) -> bool {
        self.class == T::CLASS && self.size == T::SIZE
    }
}
