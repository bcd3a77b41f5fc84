//! Self-describing single-file container for typed n-dimensional arrays.
//!
//! A [ContainerFile] holds named datasets; each pairs a [DatatypeDescriptor]
//! (class, byte order, element size) and a [DataspaceDescriptor] (rank, extents)
//! with the raw bytes of every element.
//!
//! ```no_run
//! use sdsfile::{ByteOrder, ContainerFile, DataspaceDescriptor, DatatypeDescriptor};
//!
//! # fn main() -> sdsfile::Result<()> {
//! let mut file = ContainerFile::create_new("SDS.sds")?;
//! let ds = file.create_dataset(
//!     "IntArray",
//!     DatatypeDescriptor::of::<i32>(ByteOrder::LittleEndian),
//!     DataspaceDescriptor::new(2, &[2, 3])?,
//! )?;
//! file.write_all(&ds, &[0, 1, 2, 1, 2, 3])?;
//! file.close()?;
//!
//! let file = ContainerFile::open_existing("SDS.sds")?;
//! let ds = file.open_dataset("IntArray")?;
//! let values: Vec<i32> = file.read_vec(&ds)?;
//! # Ok(())
//! # }
//! ```
mod block;
pub mod codec;
pub mod config;
pub mod dataspace;
pub mod datatype;
mod error;
pub mod metadata;
pub mod storage;

pub use codec::Element;
pub use config::ContainerConfig;
pub use dataspace::DataspaceDescriptor;
pub use datatype::{ByteOrder, ClassKind, DatatypeDescriptor};
pub use error::{Error, ErrorKind, Result};
pub use storage::{ContainerFile, Dataset, FileState};
