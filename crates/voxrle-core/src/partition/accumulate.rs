// crates/voxrle-core/src/partition/accumulate.rs

use crate::error::{Result, VoxError};
use crate::partition::boundary::BoundaryRecord;
use crate::partition::split::Partition;
use crate::rle::scan::{runs, Run};
use crate::rle::table::CostTable;
use crate::rle::variant::VariantRange;
use crate::symbol::classify::symbols;

/// Everything a worker hands back for its partition.
///
/// `costs` counts every run observed inside the partition, edge runs
/// included, as though each partition edge were a real run boundary.
/// The reducer corrects that per seam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionSummary {
    pub index: usize,
    pub partition: Partition,
    pub costs: CostTable,
    pub boundary: BoundaryRecord,
    pub active_voxels: u64,
}

impl PartitionSummary {
    pub fn empty(index: usize, partition: Partition, variants: VariantRange) -> Self {
        Self {
            index,
            partition,
            costs: CostTable::new(variants),
            boundary: BoundaryRecord::Empty,
            active_voxels: 0,
        }
    }

    #[inline]
    pub fn variants(&self) -> VariantRange {
        self.costs.variants()
    }
}

/// Scan one partition in a single pass.
///
/// `samples` must be exactly the partition's bytes. Runs are costed and
/// dropped as they complete; only the first and last are remembered.
pub fn accumulate(
    index: usize,
    partition: Partition,
    samples: &[u8],
    threshold: u8,
    variants: VariantRange,
) -> Result<PartitionSummary> {
    if samples.len() != partition.len() {
        return Err(VoxError::data_unavailable(
            format!(
                "partition {index} [{}, {})",
                partition.start, partition.end
            ),
            partition.len() as u64,
            samples.len() as u64,
        ));
    }

    let mut summary = PartitionSummary::empty(index, partition, variants);

    let mut first: Option<Run> = None;
    let mut last: Option<Run> = None;
    let mut run_count = 0u64;

    for run in runs(symbols(samples, threshold)) {
        summary.costs.add_run(run.length);
        if run.symbol.is_active() {
            summary.active_voxels += run.length;
        }
        first.get_or_insert(run);
        last = Some(run);
        run_count += 1;
    }

    if let (Some(first), Some(last)) = (first, last) {
        summary.boundary = BoundaryRecord::Edges {
            first,
            last,
            run_count,
        };
    }

    tracing::debug!(
        partition = index,
        start = partition.start,
        end = partition.end,
        runs = run_count,
        active = summary.active_voxels,
        "partition scanned"
    );

    Ok(summary)
}
