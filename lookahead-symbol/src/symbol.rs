use std::fmt;
use std::num::NonZeroU32;

/// A common grammar symbol type.
///
/// The ID is stored off by one, so that `Option<Symbol>` has the
/// same size as `Symbol`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::first()
    }
}

impl Symbol {
    /// The symbol with ID 0.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }
}

impl From<usize> for Symbol {
    /// # Panics
    ///
    /// Panics if the ID does not fit the symbol space.
    #[inline]
    fn from(id: usize) -> Self {
        let n = u32::try_from(id)
            .ok()
            .and_then(|id| id.checked_add(1))
            .and_then(NonZeroU32::new)
            .expect("ran out of Symbol space");
        Symbol { n }
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.usize()
    }
}

impl From<Symbol> for u32 {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.n.get() - 1
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.usize())
    }
}
