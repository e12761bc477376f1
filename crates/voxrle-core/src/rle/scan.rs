// crates/voxrle-core/src/rle/scan.rs

use std::iter::{FusedIterator, Peekable};

use crate::symbol::Symbol;

/// A maximal stretch of equal symbols. `length` is always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Run {
    pub symbol: Symbol,
    pub length: u64,
}

impl Run {
    pub fn new(symbol: Symbol, length: u64) -> Self {
        Self { symbol, length }
    }
}

/// Turns any symbol sequence into its maximal runs, left to right.
/// Works on any sub-range; it knows nothing about global position.
#[derive(Clone, Debug)]
pub struct RunScanner<I: Iterator<Item = Symbol>> {
    inner: Peekable<I>,
}

pub fn runs<I>(symbols: I) -> RunScanner<I::IntoIter>
where
    I: IntoIterator<Item = Symbol>,
{
    RunScanner {
        inner: symbols.into_iter().peekable(),
    }
}

impl<I: Iterator<Item = Symbol>> Iterator for RunScanner<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let symbol = self.inner.next()?;
        let mut length = 1u64;
        while self.inner.next_if_eq(&symbol).is_some() {
            length += 1;
        }
        Some(Run { symbol, length })
    }
}

impl<I: Iterator<Item = Symbol>> FusedIterator for RunScanner<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol::{Active as A, Passive as P};

    #[test]
    fn splits_into_maximal_runs() {
        let got: Vec<Run> = runs([P, P, A, A, A, P]).collect();
        assert_eq!(got, vec![Run::new(P, 2), Run::new(A, 3), Run::new(P, 1)]);
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert_eq!(runs(std::iter::empty::<Symbol>()).count(), 0);
    }
}
