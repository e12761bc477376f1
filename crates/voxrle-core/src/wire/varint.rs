// crates/voxrle-core/src/wire/varint.rs
//
// Unsigned LEB128 varints for summary frames.

use crate::error::{Result, VoxError};

pub fn put_u64(mut v: u64, out: &mut Vec<u8>) {
    while v >= 0x80 {
        out.push(((v as u8) & 0x7F) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
}

pub fn get_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    let mut acc: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let b = *bytes
            .get(*i)
            .ok_or_else(|| VoxError::Wire("varint: eof".into()))?;
        *i += 1;

        let low = (b & 0x7F) as u64;
        if shift >= 64 || ((low << shift) >> shift) != low {
            return Err(VoxError::Wire("varint: overflow".into()));
        }
        acc |= low << shift;

        if (b & 0x80) == 0 {
            return Ok(acc);
        }
        shift += 7;
        if shift > 63 {
            return Err(VoxError::Wire("varint: too long".into()));
        }
    }
}

pub fn get_usize(bytes: &[u8], i: &mut usize) -> Result<usize> {
    let v = get_u64(bytes, i)?;
    usize::try_from(v).map_err(|_| VoxError::Wire(format!("varint: {v} exceeds usize")))
}

pub fn get_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    let v = get_u64(bytes, i)?;
    u32::try_from(v).map_err(|_| VoxError::Wire(format!("varint: {v} exceeds u32")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        for v in [0u64, 1, 0x7F, 0x80, 0x3FFF, 0x4000, u32::MAX as u64, u64::MAX] {
            let mut b = Vec::new();
            put_u64(v, &mut b);
            let mut i = 0;
            assert_eq!(get_u64(&b, &mut i).unwrap(), v);
            assert_eq!(i, b.len());
        }
    }

    #[test]
    fn truncated_is_eof() {
        let mut i = 0;
        assert!(get_u64(&[0x80, 0x80], &mut i).is_err());
    }
}
