// crates/voxrle-core/src/partition/split.rs
//
// Partition policies. Every policy tiles [0, total) exactly: contiguous,
// disjoint, ordered by index, sizes summing to `total`.

use std::str::FromStr;

use crate::error::{Result, VoxError};

/// Half-open voxel index range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(VoxError::InvalidArgument(format!(
                "partition start {start} > end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow this partition's bytes out of the whole dataset.
    pub fn slice<'a>(&self, data: &'a [u8]) -> Result<&'a [u8]> {
        data.get(self.start..self.end).ok_or_else(|| {
            VoxError::data_unavailable(
                format!("partition [{}, {})", self.start, self.end),
                self.end as u64,
                data.len() as u64,
            )
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// `total / workers` voxels each; the last partition takes the remainder.
    #[default]
    LastAbsorbs,
    /// The first `total % workers` partitions get one extra voxel.
    Balanced,
}

impl FromStr for PartitionPolicy {
    type Err = VoxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" | "last-absorbs" | "chunked" => Ok(PartitionPolicy::LastAbsorbs),
            "balanced" | "even" | "scatter" => Ok(PartitionPolicy::Balanced),
            _ => Err(VoxError::InvalidConfiguration(format!(
                "unknown partition policy: {s}"
            ))),
        }
    }
}

pub fn split(total: usize, workers: usize, policy: PartitionPolicy) -> Result<Vec<Partition>> {
    if workers == 0 {
        return Err(VoxError::InvalidConfiguration(
            "worker count must be non-zero".into(),
        ));
    }
    if workers > total {
        tracing::warn!(
            workers,
            total,
            "more partitions than voxels; some partitions will be empty"
        );
    }

    let mut out = Vec::with_capacity(workers);
    match policy {
        PartitionPolicy::LastAbsorbs => {
            let chunk = total / workers;
            for i in 0..workers {
                let start = i * chunk;
                let end = if i == workers - 1 { total } else { (i + 1) * chunk };
                out.push(Partition { start, end });
            }
        }
        PartitionPolicy::Balanced => {
            let base = total / workers;
            let rem = total % workers;
            let mut offset = 0usize;
            for i in 0..workers {
                let cnt = base + usize::from(i < rem);
                out.push(Partition {
                    start: offset,
                    end: offset + cnt,
                });
                offset += cnt;
            }
        }
    }

    debug_assert_eq!(out.iter().map(Partition::len).sum::<usize>(), total);
    Ok(out)
}

/// Tile `[0, total)` at explicit cut points. Cuts must be non-decreasing and
/// `<= total`; repeated cuts give empty partitions.
pub fn split_at(total: usize, cuts: &[usize]) -> Result<Vec<Partition>> {
    let mut out = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0usize;
    for &c in cuts {
        if c < start || c > total {
            return Err(VoxError::InvalidConfiguration(format!(
                "cut {c} out of order or beyond total {total}"
            )));
        }
        out.push(Partition { start, end: c });
        start = c;
    }
    out.push(Partition { start, end: total });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles(parts: &[Partition], total: usize) {
        let mut at = 0;
        for p in parts {
            assert_eq!(p.start, at);
            assert!(p.end >= p.start);
            at = p.end;
        }
        assert_eq!(at, total);
    }

    #[test]
    fn last_partition_absorbs_remainder() {
        let parts = split(10, 3, PartitionPolicy::LastAbsorbs).unwrap();
        assert_eq!(parts.iter().map(Partition::len).collect::<Vec<_>>(), vec![3, 3, 4]);
        assert_tiles(&parts, 10);
    }

    #[test]
    fn balanced_spreads_remainder_first() {
        let parts = split(10, 3, PartitionPolicy::Balanced).unwrap();
        assert_eq!(parts.iter().map(Partition::len).collect::<Vec<_>>(), vec![4, 3, 3]);
        assert_tiles(&parts, 10);
    }

    #[test]
    fn more_workers_than_voxels() {
        for policy in [PartitionPolicy::LastAbsorbs, PartitionPolicy::Balanced] {
            let parts = split(3, 8, policy).unwrap();
            assert_eq!(parts.len(), 8);
            assert_tiles(&parts, 3);
            assert_eq!(parts.iter().filter(|p| p.is_empty()).count(), 5);
        }
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = split(10, 0, PartitionPolicy::Balanced).unwrap_err();
        assert!(matches!(err, VoxError::InvalidConfiguration(_)));
    }

    #[test]
    fn explicit_cuts() {
        let parts = split_at(10, &[0, 4, 4, 9]).unwrap();
        assert_eq!(parts.len(), 5);
        assert_tiles(&parts, 10);
        assert!(split_at(10, &[5, 3]).is_err());
        assert!(split_at(10, &[11]).is_err());
    }

    #[test]
    fn policy_names() {
        assert_eq!("balanced".parse::<PartitionPolicy>().unwrap(), PartitionPolicy::Balanced);
        assert_eq!("last".parse::<PartitionPolicy>().unwrap(), PartitionPolicy::LastAbsorbs);
        assert!("zigzag".parse::<PartitionPolicy>().is_err());
    }
}
