/// Shape of a dataset: rank and per-dimension extents, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataspaceDescriptor {
    extents: Vec<u64>,
}

impl DataspaceDescriptor {
    /// Fails with [InvalidShape](crate::Error::InvalidShape) if `rank` is zero,
    /// disagrees with the number of extents, or any extent is zero.
    pub fn new(rank: usize, extents: &[u64]) -> crate::Result<Self> {
        if rank < 1 {
            return Err(crate::Error::invalid_shape("rank must be at least 1"));
        }
        if extents.len() != rank {
            return Err(crate::Error::invalid_shape(format!(
                "rank {rank} given with {} extents",
                extents.len()
            )));
        }
        if let Some(dim) = extents.iter().position(|&n| n == 0) {
            return Err(crate::Error::invalid_shape(format!(
                "extent of dimension {dim} is zero"
            )));
        }
        let out = Self {
            extents: extents.to_vec(),
        };
        out.checked_element_count()
            .ok_or_else(|| crate::Error::invalid_shape("element count overflows u64"))?;
        Ok(out)
    }

    /// Rank inferred from the number of extents.
    pub fn simple(extents: &[u64]) -> crate::Result<Self> {
        Self::new(extents.len(), extents)
    }

    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    /// Copy of the per-dimension extents.
    pub fn extents(&self) -> Vec<u64> {
        self.extents.clone()
    }

    pub(crate) fn extents_ref(&self) -> &[u64] {
        &self.extents
    }

    pub fn total_element_count(&self) -> u64 {
        self.extents.iter().product()
    }

    fn checked_element_count(&self) -> Option<u64> {
        self.extents.iter().try_fold(1u64, |acc, &n| acc.checked_mul(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn valid_shape() {
        let ds = DataspaceDescriptor::new(2, &[5, 6]).unwrap();
        assert_eq!(ds.rank(), 2);
        assert_eq!(ds.extents(), vec![5, 6]);
        assert_eq!(ds.total_element_count(), 30);
        assert_eq!(DataspaceDescriptor::simple(&[5, 6]).unwrap(), ds);
    }

    #[test]
    fn extents_are_copied() {
        let ds = DataspaceDescriptor::simple(&[3, 4]).unwrap();
        let mut extents = ds.extents();
        extents[0] = 100;
        assert_eq!(ds.extents(), vec![3, 4]);
    }

    #[test]
    fn invalid_shapes() {
        for (rank, extents) in [
            (0, vec![]),
            (2, vec![5]),
            (1, vec![5, 6]),
            (2, vec![5, 0]),
            (2, vec![u64::MAX, 2]),
        ] {
            let err = DataspaceDescriptor::new(rank, &extents).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidShape, "{rank} {extents:?}");
        }
    }
}
