// crates/voxrle-core/src/rle/variant.rs

use std::ops::RangeInclusive;

use crate::error::{Result, VoxError};

/// Smallest supported count width.
pub const MIN_COUNT_BITS: u32 = 1;
/// Largest count width that keeps `2^n - 1` and the packet arithmetic in u64.
pub const MAX_COUNT_BITS: u32 = 63;

/// Inclusive range of packet count widths `[n_min, n_max]`.
/// A packet under variant `n` is `n` count bits plus one symbol bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariantRange {
    n_min: u32,
    n_max: u32,
}

impl VariantRange {
    pub const DEFAULT: VariantRange = VariantRange { n_min: 2, n_max: 17 };

    pub fn new(n_min: u32, n_max: u32) -> Result<Self> {
        if n_min > n_max {
            return Err(VoxError::InvalidConfiguration(format!(
                "n_min ({n_min}) must be <= n_max ({n_max})"
            )));
        }
        if n_min < MIN_COUNT_BITS || n_max > MAX_COUNT_BITS {
            return Err(VoxError::InvalidConfiguration(format!(
                "variant range {n_min}..={n_max} outside supported {MIN_COUNT_BITS}..={MAX_COUNT_BITS}"
            )));
        }
        Ok(Self { n_min, n_max })
    }

    #[inline]
    pub fn n_min(&self) -> u32 {
        self.n_min
    }

    #[inline]
    pub fn n_max(&self) -> u32 {
        self.n_max
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.n_max - self.n_min + 1) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.n_min..=self.n_max
    }

    #[inline]
    pub fn contains(&self, n: u32) -> bool {
        (self.n_min..=self.n_max).contains(&n)
    }

    #[inline]
    pub fn index_of(&self, n: u32) -> Option<usize> {
        self.contains(n).then(|| (n - self.n_min) as usize)
    }
}

impl Default for VariantRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixteen_variants() {
        let r = VariantRange::default();
        assert_eq!(r.len(), 16);
        assert_eq!(r.iter().next(), Some(2));
        assert_eq!(r.iter().last(), Some(17));
        assert_eq!(r.index_of(17), Some(15));
        assert_eq!(r.index_of(18), None);
    }

    #[test]
    fn rejects_inverted_and_out_of_range() {
        assert!(VariantRange::new(5, 4).is_err());
        assert!(VariantRange::new(0, 4).is_err());
        assert!(VariantRange::new(2, 64).is_err());
        assert!(VariantRange::new(63, 63).is_ok());
    }
}
