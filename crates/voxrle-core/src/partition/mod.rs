// crates/voxrle-core/src/partition/mod.rs

pub mod accumulate;
pub mod boundary;
pub mod split;

pub use accumulate::{accumulate, PartitionSummary};
pub use boundary::BoundaryRecord;
pub use split::{split, split_at, Partition, PartitionPolicy};
