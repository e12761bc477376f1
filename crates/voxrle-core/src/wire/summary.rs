// crates/voxrle-core/src/wire/summary.rs
//
// Partition summary frame, the unit a rank sends back to the coordinator.
//
// Layout:
//   MAGIC[4]        "VXS1"
//   version:u8      (1)
//   index           varint
//   start, end      varint, varint
//   n_min, n_max    varint, varint
//   costs           (n_max - n_min + 1) varints
//   first_sym:u8    0 | 1 | 0xFF (empty)
//   first_len       varint
//   last_sym:u8     0 | 1 | 0xFF (empty)
//   last_len        varint
//   run_count       varint
//   active_voxels   varint
//   crc32:u32 LE    (over everything before crc32)
//   blake3_16:[16]  (over everything before blake3)
//
// An empty partition is sent as sentinel symbols with zero lengths and a zero
// run count; any other combination involving the sentinel is rejected.

use crate::error::{Result, VoxError};
use crate::partition::accumulate::PartitionSummary;
use crate::partition::boundary::BoundaryRecord;
use crate::partition::split::Partition;
use crate::rle::scan::Run;
use crate::rle::table::CostTable;
use crate::rle::variant::VariantRange;
use crate::symbol::Symbol;
use crate::wire::checksum::{blake3_16, frame_crc32};
use crate::wire::varint;

const MAGIC: &[u8; 4] = b"VXS1";
const VERSION: u8 = 1;
const TRAILER_LEN: usize = 4 + 16;

pub const EMPTY_SYMBOL: u8 = 0xFF;

pub fn encode_summary(s: &PartitionSummary) -> Vec<u8> {
    let variants = s.variants();
    let mut b = Vec::with_capacity(64 + variants.len() * 4);
    b.extend_from_slice(MAGIC);
    b.push(VERSION);

    varint::put_u64(s.index as u64, &mut b);
    varint::put_u64(s.partition.start as u64, &mut b);
    varint::put_u64(s.partition.end as u64, &mut b);
    varint::put_u64(variants.n_min() as u64, &mut b);
    varint::put_u64(variants.n_max() as u64, &mut b);
    for &bits in s.costs.bits() {
        varint::put_u64(bits, &mut b);
    }

    let (first, last) = match s.boundary {
        BoundaryRecord::Empty => (None, None),
        BoundaryRecord::Edges { first, last, .. } => (Some(first), Some(last)),
    };
    put_edge(first, &mut b);
    put_edge(last, &mut b);
    varint::put_u64(s.boundary.run_count(), &mut b);
    varint::put_u64(s.active_voxels, &mut b);

    let c = frame_crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    let h = blake3_16(&b);
    b.extend_from_slice(&h);
    b
}

pub fn decode_summary(bytes: &[u8]) -> Result<PartitionSummary> {
    if bytes.len() < MAGIC.len() + 1 + TRAILER_LEN || &bytes[0..4] != MAGIC {
        return Err(VoxError::Wire("bad magic".into()));
    }

    let h_off = bytes.len() - 16;
    if blake3_16(&bytes[..h_off])[..] != bytes[h_off..] {
        return Err(VoxError::Wire("blake3 mismatch".into()));
    }
    let crc_off = h_off - 4;
    let mut crc_le = [0u8; 4];
    crc_le.copy_from_slice(&bytes[crc_off..h_off]);
    if u32::from_le_bytes(crc_le) != frame_crc32(&bytes[..crc_off]) {
        return Err(VoxError::Wire("crc32 mismatch".into()));
    }

    let body = &bytes[..crc_off];
    let mut i = 4usize;

    let version = body[i];
    i += 1;
    if version != VERSION {
        return Err(VoxError::Wire(format!("unsupported version {version}")));
    }

    let index = varint::get_usize(body, &mut i)?;
    let start = varint::get_usize(body, &mut i)?;
    let end = varint::get_usize(body, &mut i)?;
    let partition = Partition::new(start, end).map_err(|e| VoxError::Wire(e.to_string()))?;

    let n_min = varint::get_u32(body, &mut i)?;
    let n_max = varint::get_u32(body, &mut i)?;
    let variants = VariantRange::new(n_min, n_max).map_err(|e| VoxError::Wire(e.to_string()))?;

    let mut bits = Vec::with_capacity(variants.len());
    for _ in variants.iter() {
        bits.push(varint::get_u64(body, &mut i)?);
    }
    let costs = CostTable::from_bits(variants, bits)?;

    let first = get_edge(body, &mut i)?;
    let last = get_edge(body, &mut i)?;
    let run_count = varint::get_u64(body, &mut i)?;
    let active_voxels = varint::get_u64(body, &mut i)?;

    if i != body.len() {
        return Err(VoxError::Wire("trailing bytes".into()));
    }

    let boundary = match (first, last) {
        (None, None) if run_count == 0 => BoundaryRecord::Empty,
        (Some(first), Some(last)) if run_count >= 1 => BoundaryRecord::Edges {
            first,
            last,
            run_count,
        },
        _ => {
            return Err(VoxError::Wire(format!(
                "inconsistent boundary record for partition {index}"
            )))
        }
    };

    if boundary.is_empty() != partition.is_empty() {
        return Err(VoxError::Wire(format!(
            "partition {index} has {} voxels but boundary empty={}",
            partition.len(),
            boundary.is_empty()
        )));
    }

    Ok(PartitionSummary {
        index,
        partition,
        costs,
        boundary,
        active_voxels,
    })
}

fn put_edge(run: Option<Run>, out: &mut Vec<u8>) {
    match run {
        Some(r) => {
            out.push(r.symbol.bit());
            varint::put_u64(r.length, out);
        }
        None => {
            out.push(EMPTY_SYMBOL);
            varint::put_u64(0, out);
        }
    }
}

fn get_edge(bytes: &[u8], i: &mut usize) -> Result<Option<Run>> {
    let sym = *bytes
        .get(*i)
        .ok_or_else(|| VoxError::Wire("eof reading edge symbol".into()))?;
    *i += 1;
    let len = varint::get_u64(bytes, i)?;

    if sym == EMPTY_SYMBOL {
        if len != 0 {
            return Err(VoxError::Wire(format!("empty edge with length {len}")));
        }
        return Ok(None);
    }

    let symbol = Symbol::from_bit(sym)
        .ok_or_else(|| VoxError::Wire(format!("bad edge symbol 0x{sym:02x}")))?;
    if len == 0 {
        return Err(VoxError::Wire("edge run with zero length".into()));
    }
    Ok(Some(Run::new(symbol, len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::accumulate::accumulate;

    fn sample_summary() -> PartitionSummary {
        let samples = [0u8, 0, 50, 50, 50, 50, 0, 99];
        accumulate(
            2,
            Partition::new(16, 24).unwrap(),
            &samples,
            25,
            VariantRange::default(),
        )
        .unwrap()
    }

    #[test]
    fn frame_carries_summary_exactly() {
        let s = sample_summary();
        assert_eq!(decode_summary(&encode_summary(&s)).unwrap(), s);

        let e = PartitionSummary::empty(5, Partition::new(9, 9).unwrap(), VariantRange::default());
        let bytes = encode_summary(&e);
        assert!(bytes.windows(2).any(|w| w == [EMPTY_SYMBOL, 0]));
        assert_eq!(decode_summary(&bytes).unwrap(), e);
    }

    #[test]
    fn corrupted_frame_is_rejected() {
        let mut bytes = encode_summary(&sample_summary());
        bytes[7] ^= 0x01;
        assert!(matches!(decode_summary(&bytes), Err(VoxError::Wire(_))));

        let bytes = encode_summary(&sample_summary());
        assert!(decode_summary(&bytes[..bytes.len() - 1]).is_err());
        assert!(decode_summary(b"nope").is_err());
    }
}
