// crates/voxrle-core/src/symbol/bitmap.rs

use crate::error::{try_alloc_bytes, Result};
use crate::symbol::classify::{classify, Symbol};

/// Dense 1-bit-per-voxel symbol map.
///
/// Bit order is LSB-first within each byte:
/// - voxel `i` lives in byte `i / 8`, bit `i % 8`.
/// - a set bit is an Active voxel.
///
/// Only the sequential baseline materializes this; the partitioned paths
/// classify on the fly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolBitmap {
    bytes: Vec<u8>,
    len: usize,
}

impl SymbolBitmap {
    pub fn from_samples(samples: &[u8], threshold: u8) -> Result<Self> {
        let len = samples.len();
        let byte_len = packed_len(len);

        let mut bytes = try_alloc_bytes(byte_len, "symbol bitmap")?;
        bytes.resize(byte_len, 0);

        for (i, &s) in samples.iter().enumerate() {
            if classify(s, threshold).is_active() {
                bytes[i / 8] |= 1u8 << (i % 8);
            }
        }

        Ok(Self { bytes, len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Panics if `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> Symbol {
        assert!(i < self.len, "bitmap index {i} out of range {}", self.len);
        if (self.bytes[i / 8] >> (i % 8)) & 1 == 1 {
            Symbol::Active
        } else {
            Symbol::Passive
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + Clone + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    pub fn count_active(&self) -> u64 {
        let full = self.len / 8;
        let mut n: u64 = self.bytes[..full]
            .iter()
            .map(|b| b.count_ones() as u64)
            .sum();
        for i in full * 8..self.len {
            n += self.get(i).bit() as u64;
        }
        n
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..packed_len(self.len)]
    }
}

#[inline]
pub fn packed_len(voxels: usize) -> usize {
    voxels.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lsb_first_layout() {
        // voxels 0 and 9 active
        let mut samples = vec![0u8; 12];
        samples[0] = 200;
        samples[9] = 200;
        let bm = SymbolBitmap::from_samples(&samples, 25).unwrap();
        assert_eq!(bm.as_bytes(), &[0b0000_0001, 0b0000_0010]);
        assert_eq!(bm.count_active(), 2);
        assert_eq!(bm.get(9), Symbol::Active);
        assert_eq!(bm.get(8), Symbol::Passive);
    }
}
