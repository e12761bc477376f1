// crates/voxrle-core/src/reduce/estimate.rs

use crate::partition::accumulate::PartitionSummary;
use crate::rle::table::CostTable;
use crate::rle::variant::VariantRange;

/// Final per-variant RLE bit costs for one dataset and threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RleEstimate {
    pub costs: CostTable,
    pub voxel_count: u64,
    pub active_voxels: u64,
    pub run_count: u64,
}

/// One report line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantRow {
    pub n: u32,
    pub packet_bits: u32,
    pub bits: u64,
    pub bytes: u64,
    pub megabytes: f64,
    pub ratio: f64,
}

impl RleEstimate {
    pub fn from_summary(s: PartitionSummary) -> Self {
        Self {
            voxel_count: s.partition.len() as u64,
            active_voxels: s.active_voxels,
            run_count: s.boundary.run_count(),
            costs: s.costs,
        }
    }

    #[inline]
    pub fn variants(&self) -> VariantRange {
        self.costs.variants()
    }

    pub fn bits(&self, n: u32) -> Option<u64> {
        self.costs.get(n)
    }

    pub fn bytes(&self, n: u32) -> Option<u64> {
        self.bits(n).map(|b| b.div_ceil(8))
    }

    pub fn megabytes(&self, n: u32) -> Option<f64> {
        self.bits(n).map(bits_to_mb)
    }

    /// Raw 1-bit-per-voxel size over RLE size. Zero when nothing was encoded.
    pub fn compression_ratio(&self, n: u32) -> Option<f64> {
        self.bits(n).map(|b| ratio(self.voxel_count, b))
    }

    pub fn passive_voxels(&self) -> u64 {
        self.voxel_count - self.active_voxels
    }

    pub fn active_percent(&self) -> f64 {
        percent(self.active_voxels, self.voxel_count)
    }

    pub fn passive_percent(&self) -> f64 {
        percent(self.passive_voxels(), self.voxel_count)
    }

    /// Size of the dense bitmap: one bit per voxel, rounded up to bytes.
    pub fn bitmap_bytes(&self) -> u64 {
        self.voxel_count.div_ceil(8)
    }

    /// Variant with the fewest bits; ties go to the smaller width.
    pub fn best_variant(&self) -> Option<(u32, u64)> {
        self.costs
            .iter()
            .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
    }

    pub fn rows(&self) -> Vec<VariantRow> {
        self.costs
            .iter()
            .map(|(n, bits)| VariantRow {
                n,
                packet_bits: n + 1,
                bits,
                bytes: bits.div_ceil(8),
                megabytes: bits_to_mb(bits),
                ratio: ratio(self.voxel_count, bits),
            })
            .collect()
    }
}

#[inline]
fn bits_to_mb(bits: u64) -> f64 {
    bits as f64 / 8.0 / 1024.0 / 1024.0
}

#[inline]
fn ratio(voxels: u64, bits: u64) -> f64 {
    if bits == 0 {
        0.0
    } else {
        voxels as f64 / bits as f64
    }
}

#[inline]
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
