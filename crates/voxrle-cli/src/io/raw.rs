// crates/voxrle-cli/src/io/raw.rs

use std::fs::File;
use std::io::Read;

use anyhow::Context;
use voxrle_core::error::try_alloc_bytes;
use voxrle_core::VoxError;

/// Read exactly `expected` voxels from a raw 8-bit volume.
/// A short file is fatal; extra trailing bytes are ignored.
pub fn load_volume(path: &str, expected: usize) -> anyhow::Result<Vec<u8>> {
    let f = File::open(path).with_context(|| format!("open volume: {path}"))?;
    let on_disk = f
        .metadata()
        .with_context(|| format!("stat volume: {path}"))?
        .len();

    if on_disk < expected as u64 {
        return Err(VoxError::data_unavailable(format!("volume file {path}"), expected as u64, on_disk).into());
    }
    if on_disk > expected as u64 {
        tracing::warn!(path, on_disk, expected, "volume file larger than dimensions; ignoring tail");
    }

    let mut buf = try_alloc_bytes(expected, "volume buffer")?;
    f.take(expected as u64)
        .read_to_end(&mut buf)
        .with_context(|| format!("read volume: {path}"))?;

    if buf.len() != expected {
        return Err(VoxError::data_unavailable(format!("volume file {path}"), expected as u64, buf.len() as u64).into());
    }

    tracing::debug!(path, voxels = expected, "volume loaded");
    Ok(buf)
}

pub fn write_volume(path: &str, data: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, data).with_context(|| format!("write volume: {path}"))?;
    Ok(())
}

/// Read one byte per page so first-touch faults land before timing starts.
pub fn touch_pages(data: &[u8]) -> u64 {
    let mut sum = 0u64;
    for chunk in data.chunks(4096) {
        sum = sum.wrapping_add(chunk[0] as u64);
    }
    std::hint::black_box(sum)
}
