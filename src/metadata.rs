use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    dataspace::DataspaceDescriptor,
    datatype::{ByteOrder, DatatypeDescriptor},
};

/// Version string written to the index of every container.
pub const FORMAT_VERSION: &str = "1.0.0";

/// Representation of the container index, stored as JSON inside the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerIndex {
    /// Format version of the container.
    #[serde(rename = "sds")]
    pub format_version: String,
    /// Datasets by name.
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetMetadata>,
}

impl Default for ContainerIndex {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            datasets: BTreeMap::new(),
        }
    }
}

/// Representation of the metadata of a single dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Array shape, row-major.
    pub dimensions: Vec<u64>,
    /// Data type as a string.
    pub data_type: String,
    /// Byte order of every stored element.
    #[serde(default)]
    pub byte_order: ByteOrder,
    /// Absolute file offset of the dataset's block header.
    pub offset: u64,
}

impl DatasetMetadata {
    pub fn new(
        datatype: &DatatypeDescriptor,
        dataspace: &DataspaceDescriptor,
        offset: u64,
    ) -> Self {
        Self {
            dimensions: dataspace.extents(),
            data_type: datatype.type_name().to_string(),
            byte_order: datatype.byte_order(),
            offset,
        }
    }

    pub fn datatype(&self) -> crate::Result<DatatypeDescriptor> {
        DatatypeDescriptor::from_type_name(&self.data_type, self.byte_order)
    }

    pub fn dataspace(&self) -> crate::Result<DataspaceDescriptor> {
        DataspaceDescriptor::simple(&self.dimensions)
    }
}

impl ContainerIndex {
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        let index: ContainerIndex = serde_json::from_slice(bytes).map_err(|e| {
            crate::Error::invalid_container(format!("could not parse container index: {e}"))
        })?;
        let major = index.format_version.split('.').next().unwrap_or_default();
        if major != "1" {
            return Err(crate::Error::invalid_container(format!(
                "unsupported format version {}",
                index.format_version
            )));
        }
        Ok(index)
    }

    pub fn to_vec(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
