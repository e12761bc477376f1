// crates/voxrle-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VoxError>;

#[derive(Debug, Error)]
pub enum VoxError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("data unavailable ({context}): expected {expected} bytes, got {actual}")]
    DataUnavailable {
        context: String,
        expected: u64,
        actual: u64,
    },

    #[error("allocation failure ({context}): could not reserve {bytes} bytes")]
    AllocationFailure { context: String, bytes: u64 },

    #[error("worker {worker} failed: {reason}")]
    WorkerFailed { worker: usize, reason: String },

    #[error("summary frame error: {0}")]
    Wire(String),

    #[error("reduce error: {0}")]
    Reduce(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VoxError {
    pub fn data_unavailable(context: impl Into<String>, expected: u64, actual: u64) -> Self {
        VoxError::DataUnavailable {
            context: context.into(),
            expected,
            actual,
        }
    }
}

/// Reserve exactly `len` bytes, reporting failure as `AllocationFailure`
/// instead of aborting the process.
pub fn try_alloc_bytes(len: usize, context: &str) -> Result<Vec<u8>> {
    let mut v: Vec<u8> = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| VoxError::AllocationFailure {
            context: context.to_string(),
            bytes: len as u64,
        })?;
    Ok(v)
}
