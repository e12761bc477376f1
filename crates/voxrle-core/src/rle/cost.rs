// crates/voxrle-core/src/rle/cost.rs
//
// Packet cost model. Integer-only: a run of length L under count width n
// needs ceil(L / (2^n - 1)) packets of (n + 1) bits each.

use crate::error::{Result, VoxError};
use crate::rle::variant::{MAX_COUNT_BITS, MIN_COUNT_BITS};

/// Largest run length one packet can carry under width `n`: `2^n - 1`.
pub fn packet_capacity(n: u32) -> Result<u64> {
    validate_width(n)?;
    Ok(capacity(n))
}

pub fn packets_for(run_length: u64, n: u32) -> Result<u64> {
    validate_run(run_length)?;
    validate_width(n)?;
    Ok(run_length.div_ceil(capacity(n)))
}

pub fn packet_cost(run_length: u64, n: u32) -> Result<u64> {
    let packets = packets_for(run_length, n)?;
    packets.checked_mul(n as u64 + 1).ok_or_else(|| {
        VoxError::InvalidArgument(format!(
            "packet cost overflow: run_length={run_length} n={n}"
        ))
    })
}

/// Hot-path cost. Callers guarantee `run_length >= 1` and a validated width.
#[inline]
pub(crate) fn run_bits(run_length: u64, n: u32) -> u64 {
    debug_assert!(run_length >= 1);
    debug_assert!((MIN_COUNT_BITS..=MAX_COUNT_BITS).contains(&n));
    run_length.div_ceil(capacity(n)) * (n as u64 + 1)
}

#[inline]
fn capacity(n: u32) -> u64 {
    (1u64 << n) - 1
}

#[inline]
fn validate_run(run_length: u64) -> Result<()> {
    if run_length == 0 {
        return Err(VoxError::InvalidArgument(
            "run_length must be >= 1".into(),
        ));
    }
    Ok(())
}

#[inline]
fn validate_width(n: u32) -> Result<()> {
    if !(MIN_COUNT_BITS..=MAX_COUNT_BITS).contains(&n) {
        return Err(VoxError::InvalidArgument(format!(
            "count width must be in {MIN_COUNT_BITS}..={MAX_COUNT_BITS}, got {n}"
        )));
    }
    Ok(())
}
