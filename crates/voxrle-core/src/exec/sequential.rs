// crates/voxrle-core/src/exec/sequential.rs

use crate::error::Result;
use crate::partition::accumulate::accumulate;
use crate::partition::split::Partition;
use crate::reduce::estimate::RleEstimate;
use crate::reduce::reducer::reduce;
use crate::rle::cost::packet_capacity;
use crate::rle::scan::runs;
use crate::rle::table::CostTable;
use crate::rle::variant::VariantRange;
use crate::symbol::bitmap::SymbolBitmap;

/// Reference estimate: pack the bitmap once, then walk it packet by packet
/// for every variant.
pub fn estimate_sequential(
    samples: &[u8],
    threshold: u8,
    variants: VariantRange,
) -> Result<RleEstimate> {
    let bitmap = SymbolBitmap::from_samples(samples, threshold)?;
    estimate_from_bitmap(&bitmap, variants)
}

pub fn estimate_from_bitmap(bitmap: &SymbolBitmap, variants: VariantRange) -> Result<RleEstimate> {
    let mut bits = Vec::with_capacity(variants.len());
    for n in variants.iter() {
        let b = capped_scan_bits(bitmap, n)?;
        tracing::debug!(n, bits = b, "sequential variant done");
        bits.push(b);
    }

    Ok(RleEstimate {
        costs: CostTable::from_bits(variants, bits)?,
        voxel_count: bitmap.len() as u64,
        active_voxels: bitmap.count_active(),
        run_count: runs(bitmap.iter()).count() as u64,
    })
}

/// A packet closes when the symbol changes or when it is full.
fn capped_scan_bits(bitmap: &SymbolBitmap, n: u32) -> Result<u64> {
    let cap = packet_capacity(n)?;
    let packet_bits = n as u64 + 1;
    let len = bitmap.len();

    let mut total = 0u64;
    let mut pos = 0usize;
    while pos < len {
        let sym = bitmap.get(pos);
        let mut run = 1u64;
        let mut next = pos + 1;
        while next < len && run < cap && bitmap.get(next) == sym {
            run += 1;
            next += 1;
        }
        total += packet_bits;
        pos = next;
    }
    Ok(total)
}

/// The whole buffer as one partition: no bitmap, one pass for all variants.
pub fn estimate_streaming(
    samples: &[u8],
    threshold: u8,
    variants: VariantRange,
) -> Result<RleEstimate> {
    let whole = Partition::new(0, samples.len())?;
    reduce(vec![accumulate(0, whole, samples, threshold, variants)?])
}
