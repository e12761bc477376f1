// crates/voxrle-core/src/symbol/mod.rs

pub mod bitmap;
pub mod classify;

pub use classify::{classify, symbols, Symbol, Symbols};
