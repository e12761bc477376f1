// crates/voxrle-core/src/wire/checksum.rs

/// crc32 trailer of a summary frame.
pub fn frame_crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

/// Truncated blake3 digest: 16 bytes is plenty to catch a mangled frame.
pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&blake3::hash(bytes).as_bytes()[..16]);
    out
}

/// Short hex id of a dataset buffer, printed in reports so two runs can be
/// matched to the same input without re-reading it.
pub fn dataset_id(bytes: &[u8]) -> String {
    let mut h = blake3::Hasher::new();
    h.update(&(bytes.len() as u64).to_le_bytes());
    h.update(bytes);
    h.finalize().as_bytes()[..8]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
