// crates/voxrle-core/src/reduce/reducer.rs

use crate::error::{Result, VoxError};
use crate::partition::accumulate::PartitionSummary;
use crate::partition::split::Partition;
use crate::reduce::estimate::RleEstimate;
use crate::reduce::reconcile::seam_delta;

impl PartitionSummary {
    /// Combine two spans that touch (`self.partition.end == next.partition.start`).
    ///
    /// Costs are summed, then the one seam between them is corrected using
    /// `self`'s accumulated last run. The result covers both spans and keeps
    /// `self.index`. Merging is associative.
    pub fn merge(mut self, next: PartitionSummary) -> Result<PartitionSummary> {
        if self.partition.end != next.partition.start {
            return Err(VoxError::Reduce(format!(
                "partitions {} [{}, {}) and {} [{}, {}) are not adjacent",
                self.index,
                self.partition.start,
                self.partition.end,
                next.index,
                next.partition.start,
                next.partition.end
            )));
        }

        let delta = seam_delta(&self.boundary, &next.boundary, self.variants())?;
        if delta.merged {
            tracing::trace!(
                left = self.index,
                right = next.index,
                at = next.partition.start,
                "seam continues a run"
            );
        }

        self.costs.add(&next.costs)?;
        self.costs.apply_delta(delta.variants, &delta.bits)?;
        self.boundary = self.boundary.join(next.boundary);
        self.active_voxels += next.active_voxels;
        self.partition = Partition {
            start: self.partition.start,
            end: next.partition.end,
        };
        Ok(self)
    }
}

/// Fold partition summaries, ordered by partition index, into the final
/// estimate. Every seam is visited once, left to right.
///
/// Rejects an empty list, gaps or reordering in the indices, and spans that
/// do not tile one contiguous range.
pub fn reduce(summaries: Vec<PartitionSummary>) -> Result<RleEstimate> {
    let count = summaries.len();
    let mut iter = summaries.into_iter();
    let mut acc = iter
        .next()
        .ok_or_else(|| VoxError::Reduce("no partition summaries to reduce".into()))?;

    if acc.index != 0 {
        return Err(VoxError::Reduce(format!(
            "first summary has index {}, expected 0",
            acc.index
        )));
    }

    for (expected, next) in (1..).zip(iter) {
        if next.index != expected {
            return Err(VoxError::Reduce(format!(
                "summary index {} out of order, expected {expected}",
                next.index
            )));
        }
        acc = acc.merge(next)?;
    }

    let estimate = RleEstimate::from_summary(acc);
    tracing::info!(
        partitions = count,
        voxels = estimate.voxel_count,
        runs = estimate.run_count,
        "reduced partition summaries"
    );
    Ok(estimate)
}
