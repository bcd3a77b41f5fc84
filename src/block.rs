use bytes::{Buf, BufMut, BytesMut};

/// Header preceding the payload of each dataset stored in a container.
///
/// All fields are big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub(crate) mode: BlockMode,
    /// Row-major.
    pub(crate) shape: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub(crate) enum BlockMode {
    /// Payload is every element of the dataset, in order, uncompressed.
    Contiguous = 0,
}

impl BlockHeader {
    pub(crate) fn contiguous(shape: &[u64]) -> Self {
        Self {
            mode: BlockMode::Contiguous,
            shape: shape.to_vec(),
        }
    }

    /// Size of the fixed part of the header: mode and ndim.
    pub(crate) const PREFIX_LEN: usize = size_of::<u16>() + size_of::<u16>();

    pub(crate) fn from_bytes(mut bytes: &[u8]) -> crate::Result<Self> {
        if bytes.len() < Self::PREFIX_LEN {
            return Err(crate::Error::invalid_container("truncated block header"));
        }
        let mode_num = bytes.get_u16();
        let ndim = bytes.get_u16() as usize;
        if bytes.len() < ndim * size_of::<u64>() {
            return Err(crate::Error::invalid_container(format!(
                "block header declares {ndim} dimensions but is truncated"
            )));
        }
        let mut shape = Vec::with_capacity(ndim);
        for _ in 0..ndim {
            shape.push(bytes.get_u64());
        }

        let mode = match mode_num {
            0 => BlockMode::Contiguous,
            n => {
                return Err(crate::Error::invalid_container(format!(
                    "invalid block mode {n}"
                )));
            }
        };
        Ok(BlockHeader { mode, shape })
    }

    pub(crate) fn to_bytes(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.data_offset());
        buf.put_u16(self.mode as u16);
        buf.put_u16(self.shape.len() as u16);
        for &n in &self.shape {
            buf.put_u64(n);
        }
        buf
    }

    /// Length of the header for an array of the given rank.
    pub(crate) fn len_for_rank(ndim: usize) -> usize {
        Self::PREFIX_LEN + ndim * size_of::<u64>()
    }

    pub(crate) fn data_offset(&self) -> usize {
        Self::len_for_rank(self.shape.len())
    }
}
