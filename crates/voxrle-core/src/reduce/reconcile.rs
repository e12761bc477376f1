// crates/voxrle-core/src/reduce/reconcile.rs
//
// Seam reconciliation between two index-adjacent spans.
//
// Each side's scan costed its edge run as if the partition edge ended it.
// When both sides show the same symbol at the seam, the true run is the
// concatenation, and for every variant:
//
//   delta[n] = cost(a + b, n) - cost(a, n) - cost(b, n)
//
// The delta is signed. Since ceil((a + b) / c) <= ceil(a / c) + ceil(b / c)
// it is never positive.

use crate::error::{Result, VoxError};
use crate::partition::boundary::BoundaryRecord;
use crate::rle::cost::packet_cost;
use crate::rle::variant::VariantRange;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeamDelta {
    pub variants: VariantRange,
    pub bits: Vec<i64>,
    /// The seam split one run in two.
    pub merged: bool,
}

impl SeamDelta {
    pub fn zero(variants: VariantRange) -> Self {
        Self {
            variants,
            bits: vec![0; variants.len()],
            merged: false,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&d| d == 0)
    }

    pub fn get(&self, n: u32) -> Option<i64> {
        self.variants.index_of(n).map(|i| self.bits[i])
    }
}

pub fn seam_delta(
    curr: &BoundaryRecord,
    next: &BoundaryRecord,
    variants: VariantRange,
) -> Result<SeamDelta> {
    let (a, b) = match (curr.last(), next.first()) {
        (Some(a), Some(b)) if a.symbol == b.symbol => (a.length, b.length),
        _ => return Ok(SeamDelta::zero(variants)),
    };

    let joined = a.checked_add(b).ok_or_else(|| {
        VoxError::Reduce(format!("merged run length overflow: {a} + {b}"))
    })?;

    let mut bits = Vec::with_capacity(variants.len());
    for n in variants.iter() {
        let separate = packet_cost(a, n)? as i128 + packet_cost(b, n)? as i128;
        let merged = packet_cost(joined, n)? as i128;
        let d = i64::try_from(merged - separate).map_err(|_| {
            VoxError::Reduce(format!("seam delta out of i64 range at n={n}"))
        })?;
        bits.push(d);
    }

    Ok(SeamDelta {
        variants,
        bits,
        merged: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::scan::Run;
    use crate::symbol::Symbol::{Active as A, Passive as P};

    fn ends_with(run: Run) -> BoundaryRecord {
        BoundaryRecord::Edges {
            first: Run::new(P, 1),
            last: run,
            run_count: 2,
        }
    }

    fn starts_with(run: Run) -> BoundaryRecord {
        BoundaryRecord::Edges {
            first: run,
            last: Run::new(P, 1),
            run_count: 2,
        }
    }

    #[test]
    fn zero_when_symbols_differ() {
        let d = seam_delta(
            &ends_with(Run::new(P, 5)),
            &starts_with(Run::new(A, 7)),
            VariantRange::default(),
        )
        .unwrap();
        assert!(d.is_zero());
        assert!(!d.merged);
    }

    #[test]
    fn zero_against_empty_neighbor() {
        let r = ends_with(Run::new(A, 5));
        for (x, y) in [(r, BoundaryRecord::Empty), (BoundaryRecord::Empty, r)] {
            let d = seam_delta(&x, &y, VariantRange::default()).unwrap();
            assert!(d.is_zero());
            assert!(!d.merged);
        }
    }

    #[test]
    fn merging_within_capacity_saves_one_packet() {
        // n=4: capacity 15, so 5 + 7 = 12 fits one packet of 5 bits.
        let d = seam_delta(
            &ends_with(Run::new(A, 5)),
            &starts_with(Run::new(A, 7)),
            VariantRange::new(4, 4).unwrap(),
        )
        .unwrap();
        assert_eq!(d.get(4), Some(-5));
        assert!(d.merged);
    }

    #[test]
    fn merging_past_capacity_can_be_free() {
        // n=2: capacity 3. 3 + 3 = 6 still needs two packets.
        let d = seam_delta(
            &ends_with(Run::new(P, 3)),
            &starts_with(Run::new(P, 3)),
            VariantRange::new(2, 2).unwrap(),
        )
        .unwrap();
        assert_eq!(d.get(2), Some(0));
        assert!(d.merged);
    }
}
