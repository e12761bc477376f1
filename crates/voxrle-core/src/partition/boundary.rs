// crates/voxrle-core/src/partition/boundary.rs

use crate::rle::scan::Run;

/// Edge summary of one partition (or of a merged span of partitions).
///
/// `Empty` stands for a span with zero voxels. It carries no symbol and
/// never takes part in a seam.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryRecord {
    #[default]
    Empty,
    Edges {
        first: Run,
        last: Run,
        run_count: u64,
    },
}

impl BoundaryRecord {
    /// Record for a span that is one single run.
    pub fn single(run: Run) -> Self {
        BoundaryRecord::Edges {
            first: run,
            last: run,
            run_count: 1,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, BoundaryRecord::Empty)
    }

    pub fn first(&self) -> Option<Run> {
        match self {
            BoundaryRecord::Empty => None,
            BoundaryRecord::Edges { first, .. } => Some(*first),
        }
    }

    pub fn last(&self) -> Option<Run> {
        match self {
            BoundaryRecord::Empty => None,
            BoundaryRecord::Edges { last, .. } => Some(*last),
        }
    }

    pub fn run_count(&self) -> u64 {
        match self {
            BoundaryRecord::Empty => 0,
            BoundaryRecord::Edges { run_count, .. } => *run_count,
        }
    }

    /// True when `self` ends with the same symbol `next` starts with, i.e.
    /// the seam between them split one run in two.
    pub fn continues_into(&self, next: &BoundaryRecord) -> bool {
        match (self.last(), next.first()) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        }
    }

    /// Record of the span `self` followed directly by `next`.
    ///
    /// Empty is the identity. When the seam continues a run, a side that was
    /// a single run grows into the other side's edge run. `join` is
    /// associative, so spans may be combined in any grouping.
    pub fn join(self, next: BoundaryRecord) -> BoundaryRecord {
        let (a_first, a_last, a_count) = match self {
            BoundaryRecord::Empty => return next,
            BoundaryRecord::Edges {
                first,
                last,
                run_count,
            } => (first, last, run_count),
        };
        let (b_first, b_last, b_count) = match next {
            BoundaryRecord::Empty => return self,
            BoundaryRecord::Edges {
                first,
                last,
                run_count,
            } => (first, last, run_count),
        };

        if a_last.symbol != b_first.symbol {
            return BoundaryRecord::Edges {
                first: a_first,
                last: b_last,
                run_count: a_count + b_count,
            };
        }

        let merged = Run::new(a_last.symbol, a_last.length + b_first.length);
        let first = if a_count == 1 { merged } else { a_first };
        let last = if b_count == 1 { merged } else { b_last };
        BoundaryRecord::Edges {
            first,
            last,
            run_count: a_count + b_count - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol::{Active as A, Passive as P};

    fn rec(first: Run, last: Run, run_count: u64) -> BoundaryRecord {
        BoundaryRecord::Edges {
            first,
            last,
            run_count,
        }
    }

    #[test]
    fn empty_is_identity() {
        let r = rec(Run::new(A, 3), Run::new(P, 2), 4);
        assert_eq!(BoundaryRecord::Empty.join(r), r);
        assert_eq!(r.join(BoundaryRecord::Empty), r);
        assert!(!r.continues_into(&BoundaryRecord::Empty));
        assert!(!BoundaryRecord::Empty.continues_into(&r));
    }

    #[test]
    fn single_run_middle_extends_both_edges() {
        let a = rec(Run::new(P, 4), Run::new(A, 5), 2);
        let b = BoundaryRecord::single(Run::new(A, 3));
        let c = rec(Run::new(A, 7), Run::new(P, 1), 2);

        let ab = a.join(b);
        assert_eq!(ab, rec(Run::new(P, 4), Run::new(A, 8), 2));

        let abc = ab.join(c);
        assert_eq!(abc, rec(Run::new(P, 4), Run::new(P, 1), 3));
        assert_eq!(a.join(b.join(c)), abc);
    }

    #[test]
    fn genuine_seam_keeps_edges() {
        let a = rec(Run::new(P, 4), Run::new(P, 4), 1);
        let b = rec(Run::new(A, 2), Run::new(P, 9), 3);
        assert_eq!(a.join(b), rec(Run::new(P, 4), Run::new(P, 9), 4));
    }
}
