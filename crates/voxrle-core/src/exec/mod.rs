// crates/voxrle-core/src/exec/mod.rs
//
// Execution models. All of them produce the same RleEstimate for the same
// samples, threshold and variant range:
//   sequential  - dense bitmap, one packet-capped scan per variant
//   streaming   - the whole buffer as a single partition
//   threaded    - scoped threads borrowing disjoint slices of one buffer
//   distributed - ranks that own a copied slice and reply with a summary frame

pub mod distributed;
pub mod sequential;
pub mod threaded;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::config::AnalysisConfig;
use crate::error::{Result, VoxError};
use crate::reduce::estimate::RleEstimate;
use crate::validate::validate_config;

pub use distributed::estimate_distributed;
pub use sequential::{estimate_sequential, estimate_streaming};
pub use threaded::estimate_threaded;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecMode {
    Sequential,
    Streaming,
    Threaded,
    Distributed,
}

impl ExecMode {
    pub fn name(self) -> &'static str {
        match self {
            ExecMode::Sequential => "sequential",
            ExecMode::Streaming => "streaming",
            ExecMode::Threaded => "threaded",
            ExecMode::Distributed => "distributed",
        }
    }
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExecMode {
    type Err = VoxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seq" | "sequential" => Ok(ExecMode::Sequential),
            "stream" | "streaming" => Ok(ExecMode::Streaming),
            "threads" | "threaded" => Ok(ExecMode::Threaded),
            "dist" | "distributed" | "ranks" => Ok(ExecMode::Distributed),
            _ => Err(VoxError::InvalidConfiguration(format!(
                "unknown execution mode: {s}"
            ))),
        }
    }
}

/// One timed analysis.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub mode: ExecMode,
    pub workers: usize,
    pub estimate: RleEstimate,
    /// Analysis phase only: from "data resident" to "reducer done".
    pub elapsed: Duration,
}

/// Validate, then time one estimate over `samples`.
///
/// `expected_voxels` is what the caller's dimensions promise; a buffer of any
/// other length aborts with `DataUnavailable` before work starts.
pub fn analyze(
    samples: &[u8],
    expected_voxels: usize,
    cfg: &AnalysisConfig,
    mode: ExecMode,
) -> Result<Analysis> {
    validate_config(cfg)?;
    if samples.len() != expected_voxels {
        return Err(VoxError::data_unavailable(
            "dataset buffer",
            expected_voxels as u64,
            samples.len() as u64,
        ));
    }

    let workers = match mode {
        ExecMode::Sequential | ExecMode::Streaming => 1,
        ExecMode::Threaded | ExecMode::Distributed => cfg.workers,
    };

    let t0 = Instant::now();
    let estimate = match mode {
        ExecMode::Sequential => estimate_sequential(samples, cfg.threshold, cfg.variants)?,
        ExecMode::Streaming => estimate_streaming(samples, cfg.threshold, cfg.variants)?,
        ExecMode::Threaded => estimate_threaded(samples, cfg)?,
        ExecMode::Distributed => estimate_distributed(samples, cfg)?,
    };
    let elapsed = t0.elapsed();

    tracing::info!(
        mode = mode.name(),
        workers,
        elapsed_s = elapsed.as_secs_f64(),
        "analysis complete"
    );

    Ok(Analysis {
        mode,
        workers,
        estimate,
        elapsed,
    })
}
