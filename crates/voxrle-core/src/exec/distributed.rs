// crates/voxrle-core/src/exec/distributed.rs
//
// Message-passing execution. The coordinator scatters an owned copy of each
// partition's bytes to its rank, every rank replies with an encoded summary
// frame, and the coordinator gathers the frames in whatever order they land.
// A rank never sees the whole dataset, only the bytes it was sent.

use std::sync::mpsc;
use std::thread;

use crate::config::AnalysisConfig;
use crate::error::{try_alloc_bytes, Result, VoxError};
use crate::partition::accumulate::{accumulate, PartitionSummary};
use crate::partition::split::{split, Partition};
use crate::reduce::estimate::RleEstimate;
use crate::reduce::reducer::reduce;
use crate::rle::variant::VariantRange;
use crate::validate::validate_config;
use crate::wire::summary::{decode_summary, encode_summary};

/// What a rank is told besides its bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankTask {
    pub rank: usize,
    pub partition: Partition,
    pub threshold: u8,
    pub variants: VariantRange,
}

/// Rank-side step: scan the received slice, reply with a summary frame.
pub fn run_rank(task: &RankTask, local: &[u8]) -> Result<Vec<u8>> {
    let summary = accumulate(task.rank, task.partition, local, task.threshold, task.variants)?;
    Ok(encode_summary(&summary))
}

/// Coordinator-side step: decode gathered frames and order them by index.
///
/// Frames may arrive in any order; each must name the rank that sent it.
pub fn gather_summaries(
    frames: Vec<(usize, Vec<u8>)>,
    ranks: usize,
) -> Result<Vec<PartitionSummary>> {
    let mut slots: Vec<Option<PartitionSummary>> = vec![None; ranks];
    for (rank, frame) in frames {
        let s = decode_summary(&frame)?;
        if s.index != rank || rank >= ranks {
            return Err(VoxError::WorkerFailed {
                worker: rank,
                reason: format!("frame carries partition index {}", s.index),
            });
        }
        if slots[rank].replace(s).is_some() {
            return Err(VoxError::WorkerFailed {
                worker: rank,
                reason: "duplicate summary frame".into(),
            });
        }
    }
    slots
        .into_iter()
        .enumerate()
        .map(|(rank, s)| {
            s.ok_or_else(|| VoxError::WorkerFailed {
                worker: rank,
                reason: "no summary received".into(),
            })
        })
        .collect()
}

pub fn estimate_distributed(samples: &[u8], cfg: &AnalysisConfig) -> Result<RleEstimate> {
    validate_config(cfg)?;
    let parts = split(samples.len(), cfg.workers, cfg.policy)?;
    let ranks = parts.len();

    let (gather_tx, gather_rx) = mpsc::channel::<(usize, Result<Vec<u8>>)>();

    let outcome: Result<Vec<(usize, Vec<u8>)>> = thread::scope(|scope| {
        let mut scatter = Vec::with_capacity(ranks);
        let mut handles = Vec::with_capacity(ranks);
        let mut first_err: Option<VoxError> = None;

        for (rank, &partition) in parts.iter().enumerate() {
            let (tx, rx) = mpsc::sync_channel::<Vec<u8>>(1);
            let gather = gather_tx.clone();
            let task = RankTask {
                rank,
                partition,
                threshold: cfg.threshold,
                variants: cfg.variants,
            };
            let spawned = thread::Builder::new()
                .name(format!("voxrle-rank-{rank}"))
                .spawn_scoped(scope, move || {
                    let reply = match rx.recv() {
                        Ok(local) => run_rank(&task, &local),
                        Err(_) => Err(VoxError::WorkerFailed {
                            worker: rank,
                            reason: "scatter channel closed before data arrived".into(),
                        }),
                    };
                    // The coordinator outlives every rank inside this scope.
                    let _ = gather.send((rank, reply));
                });
            match spawned {
                Ok(h) => {
                    handles.push(h);
                    scatter.push(tx);
                }
                Err(e) => {
                    first_err = Some(VoxError::WorkerFailed {
                        worker: rank,
                        reason: format!("spawn failed: {e}"),
                    });
                    break;
                }
            }
        }
        drop(gather_tx);

        // Scatter.
        if first_err.is_none() {
            for ((rank, tx), part) in scatter.drain(..).enumerate().zip(parts.iter()) {
                let sent = part.slice(samples).and_then(|src| {
                    let mut buf = try_alloc_bytes(src.len(), &format!("rank {rank} receive buffer"))?;
                    buf.extend_from_slice(src);
                    tx.send(buf).map_err(|_| VoxError::WorkerFailed {
                        worker: rank,
                        reason: "rank exited before receiving its slice".into(),
                    })
                });
                if let Err(e) = sent {
                    first_err = Some(e);
                    break;
                }
            }
        }
        // Ranks still waiting see a closed channel and bail out.
        scatter.clear();

        // Gather: ends once every rank has dropped its sender.
        let mut frames = Vec::with_capacity(ranks);
        for (rank, reply) in gather_rx.iter() {
            match reply {
                Ok(frame) => {
                    tracing::debug!(rank, frame_bytes = frame.len(), "summary frame gathered");
                    frames.push((rank, frame));
                }
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }

        for (rank, h) in handles.into_iter().enumerate() {
            if h.join().is_err() {
                first_err.get_or_insert(VoxError::WorkerFailed {
                    worker: rank,
                    reason: "rank thread panicked".into(),
                });
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(frames),
        }
    });

    let summaries = gather_summaries(outcome?, ranks)?;
    reduce(summaries)
}
