// crates/voxrle-core/src/exec/threaded.rs

use std::thread;

use crate::config::AnalysisConfig;
use crate::error::{Result, VoxError};
use crate::partition::accumulate::{accumulate, PartitionSummary};
use crate::partition::split::split;
use crate::reduce::estimate::RleEstimate;
use crate::reduce::reducer::reduce;
use crate::validate::validate_config;

/// Shared-memory fork-join over one read-only buffer.
///
/// Each worker borrows its own slice and returns its summary; nothing is
/// shared mutably. Summaries are paired by partition index after the join.
pub fn estimate_threaded(samples: &[u8], cfg: &AnalysisConfig) -> Result<RleEstimate> {
    validate_config(cfg)?;
    let parts = split(samples.len(), cfg.workers, cfg.policy)?;
    let (threshold, variants) = (cfg.threshold, cfg.variants);

    let results: Vec<Result<PartitionSummary>> = thread::scope(|scope| {
        let handles: Vec<_> = parts
            .iter()
            .enumerate()
            .map(|(idx, &part)| {
                let slice = part.slice(samples);
                thread::Builder::new()
                    .name(format!("voxrle-worker-{idx}"))
                    .spawn_scoped(scope, move || {
                        accumulate(idx, part, slice?, threshold, variants)
                    })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(idx, h)| match h {
                Ok(h) => h.join().unwrap_or_else(|_| {
                    Err(VoxError::WorkerFailed {
                        worker: idx,
                        reason: "worker thread panicked".into(),
                    })
                }),
                Err(e) => Err(VoxError::WorkerFailed {
                    worker: idx,
                    reason: format!("spawn failed: {e}"),
                }),
            })
            .collect()
    });

    let summaries = results.into_iter().collect::<Result<Vec<_>>>()?;
    reduce(summaries)
}
