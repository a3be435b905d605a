//! Strongly-typed generation counter.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Starts at zero when an engine is constructed and is incremented by
/// exactly one each time the simulation advances a step. The counter
/// wraps at `u64::MAX` instead of saturating or panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of a freshly constructed engine.
    pub const ZERO: Self = Self(0);

    /// The generation following this one (wrapping at `u64::MAX`).
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// The generation `n` steps after this one (wrapping at `u64::MAX`).
    #[must_use]
    pub fn advanced_by(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
