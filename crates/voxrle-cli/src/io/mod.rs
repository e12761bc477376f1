// crates/voxrle-cli/src/io/mod.rs

pub mod raw;
