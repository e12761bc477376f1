// crates/voxrle-core/src/reduce/mod.rs

pub mod estimate;
pub mod reconcile;
pub mod reducer;

pub use estimate::{RleEstimate, VariantRow};
pub use reconcile::{seam_delta, SeamDelta};
pub use reducer::reduce;
