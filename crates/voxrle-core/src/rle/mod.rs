// crates/voxrle-core/src/rle/mod.rs

pub mod cost;
pub mod scan;
pub mod table;
pub mod variant;

pub use cost::{packet_capacity, packet_cost, packets_for};
pub use scan::{runs, Run, RunScanner};
pub use table::CostTable;
pub use variant::VariantRange;
