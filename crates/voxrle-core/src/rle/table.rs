// crates/voxrle-core/src/rle/table.rs

use crate::error::{Result, VoxError};
use crate::rle::cost::run_bits;
use crate::rle::variant::VariantRange;

/// One u64 bit total per variant in a `VariantRange`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
    variants: VariantRange,
    bits: Vec<u64>,
}

impl CostTable {
    pub fn new(variants: VariantRange) -> Self {
        Self {
            variants,
            bits: vec![0; variants.len()],
        }
    }

    pub fn from_bits(variants: VariantRange, bits: Vec<u64>) -> Result<Self> {
        if bits.len() != variants.len() {
            return Err(VoxError::InvalidArgument(format!(
                "cost table for {}..={} needs {} entries, got {}",
                variants.n_min(),
                variants.n_max(),
                variants.len(),
                bits.len()
            )));
        }
        Ok(Self { variants, bits })
    }

    #[inline]
    pub fn variants(&self) -> VariantRange {
        self.variants
    }

    #[inline]
    pub fn bits(&self) -> &[u64] {
        &self.bits
    }

    pub fn get(&self, n: u32) -> Option<u64> {
        self.variants.index_of(n).map(|i| self.bits[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.variants.iter().zip(self.bits.iter().copied())
    }

    /// Fold one completed run into every variant. `length` must be >= 1.
    #[inline]
    pub fn add_run(&mut self, length: u64) {
        for (slot, n) in self.bits.iter_mut().zip(self.variants.iter()) {
            *slot += run_bits(length, n);
        }
    }

    pub fn add(&mut self, other: &CostTable) -> Result<()> {
        self.check_same_range(other.variants)?;
        for (a, b) in self.bits.iter_mut().zip(other.bits.iter()) {
            *a = a.checked_add(*b).ok_or_else(|| {
                VoxError::Reduce("per-variant bit total overflowed u64".into())
            })?;
        }
        Ok(())
    }

    /// Apply a signed per-variant correction.
    /// The separate costs being replaced must already be in this table.
    pub fn apply_delta(&mut self, variants: VariantRange, delta: &[i64]) -> Result<()> {
        self.check_same_range(variants)?;
        for ((slot, &d), n) in self.bits.iter_mut().zip(delta.iter()).zip(variants.iter()) {
            let cur = *slot;
            *slot = cur.checked_add_signed(d).ok_or_else(|| {
                VoxError::Reduce(format!(
                    "seam correction {d} out of range for total {cur} at n={n}"
                ))
            })?;
        }
        Ok(())
    }

    fn check_same_range(&self, other: VariantRange) -> Result<()> {
        if self.variants != other {
            return Err(VoxError::Reduce(format!(
                "variant range mismatch: {}..={} vs {}..={}",
                self.variants.n_min(),
                self.variants.n_max(),
                other.n_min(),
                other.n_max()
            )));
        }
        Ok(())
    }
}
