pub mod error;
pub mod validate;

pub mod config;
pub mod exec;
pub mod partition;
pub mod reduce;
pub mod rle;
pub mod symbol;
pub mod wire;

pub use crate::config::{AnalysisConfig, VolumeDims};
pub use crate::error::{Result, VoxError};
pub use crate::exec::{Analysis, ExecMode};
pub use crate::partition::{Partition, PartitionPolicy, PartitionSummary};
pub use crate::reduce::estimate::RleEstimate;
pub use crate::rle::cost::packet_cost;
pub use crate::rle::variant::VariantRange;
pub use crate::symbol::{classify, Symbol};
