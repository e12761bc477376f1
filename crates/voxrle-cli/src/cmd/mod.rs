// crates/voxrle-cli/src/cmd/mod.rs

pub mod bench;
pub mod common;
pub mod seq;
pub mod stats;
pub mod synth;
