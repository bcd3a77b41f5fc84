use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use log::{debug, trace, warn};

use crate::{
    block::BlockHeader,
    codec::{self, Element},
    config::ContainerConfig,
    dataspace::DataspaceDescriptor,
    datatype::DatatypeDescriptor,
    metadata::{ContainerIndex, DatasetMetadata},
};

/// Magic bytes at the start of every container.
pub const MAGIC: &[u8; 8] = b"\x89SDS\r\n\x1a\n";

/// Version of the superblock layout.
pub const VERSION: u32 = 1;

/// Superblock size in bytes (magic + version + flags + index offset + index length).
pub const SUPERBLOCK_SIZE: u64 = 32;

/// Fixed header at the start of the file, locating the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Superblock {
    index_offset: u64,
    index_len: u64,
}

impl Superblock {
    fn from_bytes(mut bytes: &[u8]) -> crate::Result<Self> {
        if bytes.len() < SUPERBLOCK_SIZE as usize || &bytes[..MAGIC.len()] != MAGIC {
            return Err(crate::Error::invalid_container("invalid magic bytes"));
        }
        bytes.advance(MAGIC.len());
        let version = bytes.get_u32_le();
        if version != VERSION {
            return Err(crate::Error::invalid_container(format!(
                "unsupported superblock version {version}, expected {VERSION}"
            )));
        }
        let _flags = bytes.get_u32_le();
        Ok(Self {
            index_offset: bytes.get_u64_le(),
            index_len: bytes.get_u64_le(),
        })
    }

    fn to_bytes(self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(SUPERBLOCK_SIZE as usize);
        buf.put_slice(MAGIC);
        buf.put_u32_le(VERSION);
        buf.put_u32_le(0); // flags (reserved)
        buf.put_u64_le(self.index_offset);
        buf.put_u64_le(self.index_len);
        buf
    }
}

/// Lifecycle state of a [ContainerFile].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    OpenForWrite,
    OpenForRead,
    /// Terminal.
    Closed,
}

/// Handle to a named dataset inside a [ContainerFile].
///
/// Holds no file resources; it is validated against its container on every use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    datatype: DatatypeDescriptor,
    dataspace: DataspaceDescriptor,
    /// Offset of the block header.
    offset: u64,
}

impl Dataset {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datatype(&self) -> DatatypeDescriptor {
        self.datatype
    }

    pub fn dataspace(&self) -> DataspaceDescriptor {
        self.dataspace.clone()
    }

    /// Number of stored bytes: element count times element size.
    pub fn byte_len(&self) -> u64 {
        self.dataspace.total_element_count() * self.datatype.size() as u64
    }

    fn data_offset(&self) -> u64 {
        self.offset + BlockHeader::len_for_rank(self.dataspace.rank()) as u64
    }

    fn check_len(&self, actual: u64) -> crate::Result<()> {
        let expected = self.byte_len();
        if actual != expected {
            return Err(crate::Error::ShapeMismatch { expected, actual });
        }
        Ok(())
    }

    fn check_type<T: Element>(&self) -> crate::Result<()> {
        if !self.datatype.matches::<T>() {
            return Err(crate::Error::TypeMismatch {
                expected: self.datatype.type_name(),
                actual: DatatypeDescriptor::of::<T>(self.datatype.byte_order()).type_name(),
            });
        }
        Ok(())
    }
}

/// A single file holding named, typed, fixed-shape datasets.
///
/// Creating a dataset appends its block, then a new copy of the index,
/// and only then repoints the superblock, so an interrupted creation leaves
/// the previous index in force. Superseded index copies stay in the file
/// as unused space. Dropping an open container closes it.
#[derive(Debug)]
pub struct ContainerFile {
    path: PathBuf,
    file: Option<File>,
    state: FileState,
    index: ContainerIndex,
    /// End of the live index; new blocks are appended here.
    tail: u64,
    config: Option<ContainerConfig>,
}

impl ContainerFile {
    /// Create a container for writing with the default configuration,
    /// replacing any existing file at `path`.
    pub fn create_new<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        Self::create_with_config(path, ContainerConfig::default())
    }

    pub fn create_with_config<P: AsRef<Path>>(
        path: P,
        config: ContainerConfig,
    ) -> crate::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.read(true).write(true);
        if config.truncate {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options.open(&path)?;
        let mut out = Self {
            path,
            file: Some(file),
            state: FileState::OpenForWrite,
            index: ContainerIndex::default(),
            tail: SUPERBLOCK_SIZE,
            config: Some(config),
        };
        out.tail = out.commit(&out.index, SUPERBLOCK_SIZE)?;
        debug!("created container {}", out.path.display());
        Ok(out)
    }

    /// Open an existing container read-only.
    pub fn open_existing<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => crate::Error::FileNotFound(path.clone()),
            _ => crate::Error::Io(e),
        })?;
        let file_len = file.metadata()?.len();
        if file_len < SUPERBLOCK_SIZE {
            return Err(crate::Error::invalid_container(format!(
                "file is {file_len} bytes, shorter than the superblock"
            )));
        }

        let mut sb_bytes = [0u8; SUPERBLOCK_SIZE as usize];
        read_at(&file, 0, &mut sb_bytes)?;
        let superblock = Superblock::from_bytes(&sb_bytes)?;
        let index_end = superblock
            .index_offset
            .checked_add(superblock.index_len)
            .filter(|&end| superblock.index_offset >= SUPERBLOCK_SIZE && end <= file_len)
            .ok_or_else(|| crate::Error::invalid_container("index lies outside the file"))?;

        let mut index_bytes = vec![0u8; superblock.index_len as usize];
        read_at(&file, superblock.index_offset, &mut index_bytes)?;
        let index = ContainerIndex::from_slice(&index_bytes)?;
        let mut extents = Vec::with_capacity(index.datasets.len());
        for (name, meta) in &index.datasets {
            let end = validate_block(&file, name, meta, superblock.index_offset)?;
            extents.push((meta.offset, end, name));
        }
        extents.sort();
        for pair in extents.windows(2) {
            let (_, prev_end, prev_name) = pair[0];
            let (offset, _, name) = pair[1];
            if offset < prev_end {
                return Err(crate::Error::invalid_container(format!(
                    "datasets {prev_name:?} and {name:?} overlap"
                )));
            }
        }

        debug!(
            "opened container {} with {} dataset(s)",
            path.display(),
            index.datasets.len()
        );
        Ok(Self {
            path,
            file: Some(file),
            state: FileState::OpenForRead,
            index,
            tail: index_end,
            config: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> FileState {
        self.state
    }

    /// Configuration the container was created with;
    /// `None` for containers opened with [open_existing](Self::open_existing).
    pub fn config(&self) -> Option<&ContainerConfig> {
        self.config.as_ref()
    }

    pub fn is_writable(&self) -> bool {
        self.state == FileState::OpenForWrite
    }

    pub fn is_closed(&self) -> bool {
        self.state == FileState::Closed
    }

    /// Names of all datasets, sorted.
    pub fn dataset_names(&self) -> crate::Result<Vec<String>> {
        self.open_file()?;
        Ok(self.index.datasets.keys().cloned().collect())
    }

    pub fn contains(&self, name: &str) -> crate::Result<bool> {
        self.open_file()?;
        Ok(self.index.datasets.contains_key(name))
    }

    /// Create a zero-filled dataset.
    pub fn create_dataset(
        &mut self,
        name: &str,
        datatype: DatatypeDescriptor,
        dataspace: DataspaceDescriptor,
    ) -> crate::Result<Dataset> {
        self.writable_file()?;
        if name.is_empty() || name.contains('/') {
            return Err(crate::Error::InvalidName(name.to_string()));
        }
        if self.index.datasets.contains_key(name) {
            return Err(crate::Error::DuplicateName(name.to_string()));
        }
        if dataspace.rank() > u16::MAX as usize {
            return Err(crate::Error::invalid_shape(format!(
                "rank {} exceeds the maximum of {}",
                dataspace.rank(),
                u16::MAX
            )));
        }

        let header = BlockHeader::contiguous(dataspace.extents_ref());
        let offset = self.tail;
        let end = dataspace
            .total_element_count()
            .checked_mul(datatype.size() as u64)
            .and_then(|n| n.checked_add(header.data_offset() as u64))
            .and_then(|n| n.checked_add(offset))
            .ok_or_else(|| crate::Error::invalid_shape("dataset too large"))?;
        let payload_len = end - offset - header.data_offset() as u64;

        let file = self.writable_file()?;
        write_at(file, offset, &header.to_bytes())?;
        write_zeros(file, payload_len)?;

        let mut index = self.index.clone();
        index.datasets.insert(
            name.to_string(),
            DatasetMetadata::new(&datatype, &dataspace, offset),
        );
        self.tail = self.commit(&index, end)?;
        self.index = index;
        debug!(
            "created dataset {name:?} ({}, {:?}) at offset {offset}",
            datatype.type_name(),
            dataspace.extents_ref()
        );
        Ok(Dataset {
            name: name.to_string(),
            datatype,
            dataspace,
            offset,
        })
    }

    pub fn open_dataset(&self, name: &str) -> crate::Result<Dataset> {
        self.open_file()?;
        let meta = self
            .index
            .datasets
            .get(name)
            .ok_or_else(|| crate::Error::DatasetNotFound(name.to_string()))?;
        Ok(Dataset {
            name: name.to_string(),
            datatype: meta.datatype()?,
            dataspace: meta.dataspace()?,
            offset: meta.offset,
        })
    }

    /// Write every element of the dataset, encoded in its declared byte order.
    pub fn write_all<T: Element>(&mut self, dataset: &Dataset, values: &[T]) -> crate::Result<()> {
        self.writable_file()?;
        dataset.check_type::<T>()?;
        dataset.check_len((values.len() * T::SIZE) as u64)?;
        let bytes = codec::encode(values, dataset.datatype.byte_order());
        self.write_raw(dataset, &bytes)
    }

    /// Write the stored representation of every element.
    pub fn write_raw(&mut self, dataset: &Dataset, bytes: &[u8]) -> crate::Result<()> {
        self.writable_file()?;
        dataset.check_len(bytes.len() as u64)?;
        self.resolve(dataset)?;
        trace!("writing {} bytes to {:?}", bytes.len(), dataset.name);
        write_at(self.writable_file()?, dataset.data_offset(), bytes)?;
        Ok(())
    }

    /// Read every element of the dataset into `out`,
    /// swapping bytes if the stored order differs from the host's.
    pub fn read_all<T: Element>(&self, dataset: &Dataset, out: &mut [T]) -> crate::Result<()> {
        self.open_file()?;
        dataset.check_type::<T>()?;
        dataset.check_len((out.len() * T::SIZE) as u64)?;
        let mut raw = vec![0u8; out.len() * T::SIZE];
        self.read_raw(dataset, &mut raw)?;
        codec::decode_into(Bytes::from(raw), dataset.datatype.byte_order(), out);
        Ok(())
    }

    /// Read every element into a new vector.
    pub fn read_vec<T: Element>(&self, dataset: &Dataset) -> crate::Result<Vec<T>> {
        let count = usize::try_from(dataset.dataspace.total_element_count())
            .map_err(|_| crate::Error::invalid_shape("dataset too large for memory"))?;
        let mut out = vec![T::default(); count];
        self.read_all(dataset, &mut out)?;
        Ok(out)
    }

    /// Read the stored representation of every element.
    pub fn read_raw(&self, dataset: &Dataset, out: &mut [u8]) -> crate::Result<()> {
        let file = self.open_file()?;
        dataset.check_len(out.len() as u64)?;
        self.resolve(dataset)?;
        trace!("reading {} bytes from {:?}", out.len(), dataset.name);
        read_at(file, dataset.data_offset(), out)?;
        Ok(())
    }

    /// Sync written data and the committed index to storage.
    pub fn flush(&mut self) -> crate::Result<()> {
        self.writable_file()?.sync_all()?;
        Ok(())
    }

    /// Release the file, flushing first if open for writing
    /// and configured to sync on close.
    ///
    /// Closing an already closed container does nothing.
    pub fn close(&mut self) -> crate::Result<()> {
        let result = match self.state {
            FileState::Closed => return Ok(()),
            FileState::OpenForRead => Ok(()),
            FileState::OpenForWrite => {
                if self.config.as_ref().is_some_and(|c| c.sync_on_close) {
                    self.flush()
                } else {
                    Ok(())
                }
            }
        };
        self.file = None;
        self.state = FileState::Closed;
        debug!("closed container {}", self.path.display());
        result
    }

    /// Write `index` at `at`, then point the superblock at it.
    ///
    /// Returns the new end of the file.
    fn commit(&self, index: &ContainerIndex, at: u64) -> crate::Result<u64> {
        let index_bytes = index.to_vec()?;
        let superblock = Superblock {
            index_offset: at,
            index_len: index_bytes.len() as u64,
        };
        let end = at + superblock.index_len;
        let file = self.writable_file()?;
        write_at(file, at, &index_bytes)?;
        file.set_len(end)?;
        // the superblock write is the commit point
        write_at(file, 0, &superblock.to_bytes())?;
        Ok(end)
    }

    fn open_file(&self) -> crate::Result<&File> {
        match (&self.file, self.state) {
            (Some(f), FileState::OpenForRead | FileState::OpenForWrite) => Ok(f),
            _ => Err(crate::Error::Closed),
        }
    }

    fn writable_file(&self) -> crate::Result<&File> {
        match self.state {
            FileState::OpenForWrite => self.open_file(),
            FileState::OpenForRead => Err(crate::Error::NotWritable),
            FileState::Closed => Err(crate::Error::Closed),
        }
    }

    /// Check that a handle refers to a dataset of this container.
    fn resolve(&self, dataset: &Dataset) -> crate::Result<()> {
        match self.index.datasets.get(&dataset.name) {
            Some(meta)
                if meta.offset == dataset.offset
                    && meta.dimensions == dataset.dataspace.extents_ref() =>
            {
                Ok(())
            }
            _ => Err(crate::Error::DatasetNotFound(dataset.name.clone())),
        }
    }
}

impl Drop for ContainerFile {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("failed to close container {}: {e}", self.path.display());
        }
    }
}

/// Check a dataset's block against its index entry, returning the end of the block.
fn validate_block(
    file: &File,
    name: &str,
    meta: &DatasetMetadata,
    data_end: u64,
) -> crate::Result<u64> {
    let invalid =
        |message: String| crate::Error::invalid_container(format!("dataset {name:?}: {message}"));
    let datatype = meta.datatype().map_err(|e| invalid(e.to_string()))?;
    let dataspace = meta.dataspace().map_err(|e| invalid(e.to_string()))?;

    let header_len = BlockHeader::len_for_rank(dataspace.rank()) as u64;
    let end = dataspace
        .total_element_count()
        .checked_mul(datatype.size() as u64)
        .and_then(|n| n.checked_add(header_len))
        .and_then(|n| n.checked_add(meta.offset));
    let end = match end {
        Some(end) if meta.offset >= SUPERBLOCK_SIZE && end <= data_end => end,
        _ => return Err(invalid("storage lies outside the data region".into())),
    };

    let mut header_bytes = vec![0u8; header_len as usize];
    read_at(file, meta.offset, &mut header_bytes)?;
    let header = BlockHeader::from_bytes(&header_bytes).map_err(|e| invalid(e.to_string()))?;
    if header.shape != meta.dimensions {
        return Err(invalid(format!(
            "block header has shape {:?}, expected {:?}",
            header.shape, meta.dimensions
        )));
    }
    Ok(end)
}

fn write_at(mut file: &File, offset: u64, bytes: &[u8]) -> io::Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.write_all(bytes)
}

fn read_at(mut file: &File, offset: u64, buf: &mut [u8]) -> io::Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(buf)
}

/// Write zeros from the current position.
fn write_zeros(mut file: &File, len: u64) -> io::Result<()> {
    let written = io::copy(&mut io::repeat(0).take(len), &mut file)?;
    debug_assert_eq!(written, len);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteOrder, ErrorKind};

    fn int_dataset(file: &mut ContainerFile, name: &str, shape: &[u64]) -> Dataset {
        file.create_dataset(
            name,
            DatatypeDescriptor::of::<i32>(ByteOrder::LittleEndian),
            DataspaceDescriptor::simple(shape).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn superblock_layout() {
        let sb = Superblock {
            index_offset: 100,
            index_len: 42,
        };
        let bytes = sb.to_bytes();
        assert_eq!(bytes.len() as u64, SUPERBLOCK_SIZE);
        assert_eq!(&bytes[..8], MAGIC);
        assert_eq!(Superblock::from_bytes(&bytes).unwrap(), sb);
    }

    #[test]
    fn superblock_bad_version() {
        let mut bytes = Superblock {
            index_offset: 32,
            index_len: 0,
        }
        .to_bytes();
        bytes[8] = 9;
        let err = Superblock::from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported superblock version 9"));
    }

    #[test]
    fn new_dataset_is_zeroed() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ContainerFile::create_new(dir.path().join("z.sds")).unwrap();
        let ds = int_dataset(&mut file, "zeros", &[3, 4]);
        assert_eq!(ds.byte_len(), 48);
        assert_eq!(file.read_vec::<i32>(&ds).unwrap(), vec![0; 12]);
    }

    #[test]
    fn blocks_follow_the_live_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ContainerFile::create_new(dir.path().join("o.sds")).unwrap();
        let a = int_dataset(&mut file, "a", &[2]);
        let b = int_dataset(&mut file, "b", &[3, 1]);

        let empty_len = ContainerIndex::default().to_vec().unwrap().len() as u64;
        assert_eq!(a.offset, SUPERBLOCK_SIZE + empty_len);

        let mut only_a = file.index.clone();
        only_a.datasets.remove("b");
        let a_end = a.data_offset() + a.byte_len();
        assert_eq!(b.offset, a_end + only_a.to_vec().unwrap().len() as u64);

        let index_len = file.index.to_vec().unwrap().len() as u64;
        assert_eq!(file.tail, b.data_offset() + b.byte_len() + index_len);
        assert_eq!(std::fs::metadata(file.path()).unwrap().len(), file.tail);
    }

    #[test]
    fn type_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ContainerFile::create_new(dir.path().join("t.sds")).unwrap();
        let ds = int_dataset(&mut file, "ints", &[2]);
        let err = file.write_all(&ds, &[1.0f32, 2.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let mut out = [0i64; 1];
        let err = file.read_all(&ds, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn invalid_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ContainerFile::create_new(dir.path().join("n.sds")).unwrap();
        for name in ["", "a/b"] {
            let err = file
                .create_dataset(
                    name,
                    DatatypeDescriptor::of::<i8>(ByteOrder::LittleEndian),
                    DataspaceDescriptor::simple(&[1]).unwrap(),
                )
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName);
        }
        assert!(file.dataset_names().unwrap().is_empty());
    }

    #[test]
    fn handle_from_other_container() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = ContainerFile::create_new(dir.path().join("1.sds")).unwrap();
        let mut second = ContainerFile::create_new(dir.path().join("2.sds")).unwrap();
        int_dataset(&mut first, "pad", &[8]);
        let foreign = int_dataset(&mut first, "x", &[2]);
        int_dataset(&mut second, "x", &[2]);
        let err = second.write_all(&foreign, &[1, 2]).unwrap_err();
        assert!(matches!(err, crate::Error::DatasetNotFound(_)));
    }

    #[test]
    fn operations_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ContainerFile::create_new(dir.path().join("c.sds")).unwrap();
        let ds = int_dataset(&mut file, "x", &[1]);
        file.close().unwrap();
        assert!(file.is_closed());
        assert_eq!(file.open_dataset("x").unwrap_err().kind(), ErrorKind::Closed);
        assert_eq!(file.write_all(&ds, &[1]).unwrap_err().kind(), ErrorKind::Closed);
        assert_eq!(file.dataset_names().unwrap_err().kind(), ErrorKind::Closed);
    }

    #[test]
    fn drop_keeps_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.sds");
        {
            let mut file = ContainerFile::create_new(&path).unwrap();
            let ds = int_dataset(&mut file, "kept", &[2]);
            file.write_all(&ds, &[7, 8]).unwrap();
        }
        let file = ContainerFile::open_existing(&path).unwrap();
        let ds = file.open_dataset("kept").unwrap();
        assert_eq!(file.read_vec::<i32>(&ds).unwrap(), vec![7, 8]);
    }

    #[test]
    fn flushed_datasets_survive_interrupted_creation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i.sds");
        let mut file = ContainerFile::create_new(&path).unwrap();
        let a = int_dataset(&mut file, "a", &[3]);
        file.write_all(&a, &[1, 2, 3]).unwrap();
        file.flush().unwrap();

        // a block written without its index reaching the superblock
        let b = BlockHeader::contiguous(&[100]);
        write_at(file.writable_file().unwrap(), file.tail, &b.to_bytes()).unwrap();
        write_zeros(file.writable_file().unwrap(), 400).unwrap();
        std::mem::forget(file);

        let file = ContainerFile::open_existing(&path).unwrap();
        assert_eq!(file.dataset_names().unwrap(), vec!["a"]);
        let a = file.open_dataset("a").unwrap();
        assert_eq!(file.read_vec::<i32>(&a).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn overlapping_blocks_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.sds");
        {
            let mut file = ContainerFile::create_new(&path).unwrap();
            int_dataset(&mut file, "a", &[4]);
            int_dataset(&mut file, "b", &[4]);
        }

        // point "b" at the storage of "a"
        let mut bytes = std::fs::read(&path).unwrap();
        let sb = Superblock::from_bytes(&bytes).unwrap();
        let start = sb.index_offset as usize;
        let mut index = ContainerIndex::from_slice(&bytes[start..]).unwrap();
        let a_offset = index.datasets["a"].offset;
        index.datasets.get_mut("b").unwrap().offset = a_offset;
        let index_bytes = index.to_vec().unwrap();
        bytes.truncate(start);
        bytes.extend_from_slice(&index_bytes);
        let sb = Superblock {
            index_offset: sb.index_offset,
            index_len: index_bytes.len() as u64,
        };
        bytes[..SUPERBLOCK_SIZE as usize].copy_from_slice(&sb.to_bytes());
        std::fs::write(&path, &bytes).unwrap();

        let err = ContainerFile::open_existing(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("overlap"), "{err}");
    }

    #[test]
    fn config_only_for_created_containers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.sds");
        let config = ContainerConfig::default().with_byte_order(ByteOrder::BigEndian);
        let file = ContainerFile::create_with_config(&path, config.clone()).unwrap();
        assert_eq!(file.config(), Some(&config));
        drop(file);

        let file = ContainerFile::open_existing(&path).unwrap();
        assert_eq!(file.config(), None);
    }
}
