// crates/voxrle-core/src/symbol/classify.rs
//
// Binary classification of raw intensity samples.
// A voxel is Active iff sample > threshold, Passive otherwise.

use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Passive,
    Active,
}

impl Symbol {
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Symbol::Passive => 0,
            Symbol::Active => 1,
        }
    }

    /// Inverse of `bit`; any other value is not a symbol.
    #[inline]
    pub fn from_bit(b: u8) -> Option<Symbol> {
        match b {
            0 => Some(Symbol::Passive),
            1 => Some(Symbol::Active),
            _ => None,
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self == Symbol::Active
    }
}

#[inline]
pub fn classify(sample: u8, threshold: u8) -> Symbol {
    if sample > threshold {
        Symbol::Active
    } else {
        Symbol::Passive
    }
}

/// Lazy symbol view over a sample slice.
/// A clone is an independent cursor over the same borrowed samples.
#[derive(Clone, Debug)]
pub struct Symbols<'a> {
    samples: std::slice::Iter<'a, u8>,
    threshold: u8,
}

pub fn symbols(samples: &[u8], threshold: u8) -> Symbols<'_> {
    Symbols {
        samples: samples.iter(),
        threshold,
    }
}

impl Iterator for Symbols<'_> {
    type Item = Symbol;

    #[inline]
    fn next(&mut self) -> Option<Symbol> {
        self.samples.next().map(|&s| classify(s, self.threshold))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl ExactSizeIterator for Symbols<'_> {}
impl FusedIterator for Symbols<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify(25, 25), Symbol::Passive);
        assert_eq!(classify(26, 25), Symbol::Active);
        assert_eq!(classify(0, 0), Symbol::Passive);
        assert_eq!(classify(255, 255), Symbol::Passive);
        assert_eq!(classify(255, 254), Symbol::Active);
    }

    #[test]
    fn symbol_view_is_restartable() {
        let samples = [0u8, 30, 30, 10, 99];
        let view = symbols(&samples, 25);
        let a: Vec<Symbol> = view.clone().collect();
        let b: Vec<Symbol> = view.collect();
        assert_eq!(a, b);
        assert_eq!(
            a,
            vec![
                Symbol::Passive,
                Symbol::Active,
                Symbol::Active,
                Symbol::Passive,
                Symbol::Active
            ]
        );
    }
}
