// crates/voxrle-core/src/wire/mod.rs

pub mod checksum;
pub mod summary;
pub mod varint;

pub use summary::{decode_summary, encode_summary};
