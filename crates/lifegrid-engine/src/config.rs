//! Engine configuration, density levels, and construction errors.
//!
//! [`LifeConfig`] is the builder-input for [`LifeEngine::from_config`].
//! [`validate()`](LifeConfig::validate) checks structural invariants
//! before any grid memory is allocated.
//!
//! [`LifeEngine::from_config`]: crate::LifeEngine::from_config

use std::error::Error;
use std::fmt;

use lifegrid_core::CellCoord;
use lifegrid_space::{SpaceError, Torus};

// ── DensityLevel ───────────────────────────────────────────────────

/// Initial seeding density, in steps of 5%.
///
/// A level `d` gives each cell an independent `d * 5%` chance of being
/// seeded alive. Levels [`RECOMMENDED_MIN`](Self::RECOMMENDED_MIN) to
/// [`RECOMMENDED_MAX`](Self::RECOMMENDED_MAX) (10% to 50%) produce
/// interesting runs. Other levels are accepted as-is: level 0 seeds an
/// empty grid and any level of 20 or more seeds every cell alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DensityLevel(pub u32);

impl DensityLevel {
    /// Percentage points per level.
    pub const STEP_PERCENT: u32 = 5;
    /// Lowest level offered to interactive users (10%).
    pub const RECOMMENDED_MIN: Self = Self(2);
    /// Highest level offered to interactive users (50%).
    pub const RECOMMENDED_MAX: Self = Self(10);
    /// Default level (25%).
    pub const DEFAULT: Self = Self(5);

    /// The raw level.
    pub fn level(self) -> u32 {
        self.0
    }

    /// Seeding chance in whole percent. May exceed 100.
    pub fn percent(self) -> u32 {
        self.0.saturating_mul(Self::STEP_PERCENT)
    }

    /// Seeding chance as a probability, capped at 1.0.
    pub fn probability(self) -> f64 {
        (f64::from(self.percent()) / 100.0).min(1.0)
    }

    /// Whether this level lies in the recommended interactive range.
    pub fn is_recommended(self) -> bool {
        (Self::RECOMMENDED_MIN..=Self::RECOMMENDED_MAX).contains(&self)
    }
}

impl Default for DensityLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for DensityLevel {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.0, self.percent())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing an engine or its helpers.
///
/// Construction is the only fallible phase: once an engine exists,
/// stepping and point mutation never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimensions are not a valid torus (zero or too large).
    Space(SpaceError),
    /// `rows * cols` does not fit in `usize`.
    CellCountOverflow {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
    /// A cell listed for an explicit starting pattern lies outside the grid.
    PatternOutOfBounds {
        /// The offending cell.
        coord: CellCoord,
    },
    /// A viewport resolution is zero or exceeds `i32::MAX` pixels.
    InvalidResolution {
        /// The rejected value.
        value: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "cell count {rows} x {cols} overflows usize")
            }
            Self::PatternOutOfBounds { coord } => {
                write!(f, "pattern cell {coord} lies outside the grid")
            }
            Self::InvalidResolution { value } => {
                write!(f, "resolution must be in [1, {}], got {value}", i32::MAX)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── LifeConfig ─────────────────────────────────────────────────────

/// Complete description of a seeded engine.
///
/// Two engines built from equal configs start from identical grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    /// Number of rows (grid height). Default: 117.
    pub rows: u32,
    /// Number of columns (grid width). Default: 229.
    pub cols: u32,
    /// Seeding density. Default: level 5 (25%).
    pub density: DensityLevel,
    /// Seed for the ChaCha8 generator used at construction. Default: 0.
    pub seed: u64,
}

impl Default for LifeConfig {
    /// A 1149 x 585 pixel canvas at the default 5-pixel resolution.
    fn default() -> Self {
        Self {
            rows: 117,
            cols: 229,
            density: DensityLevel::DEFAULT,
            seed: 0,
        }
    }
}

impl LifeConfig {
    /// Check the dimensions and return the topology they describe.
    pub fn validate(&self) -> Result<Torus, ConfigError> {
        validate_dims(self.rows, self.cols)
    }
}

/// Build the torus for `rows x cols` and make sure its buffers are addressable.
pub(crate) fn validate_dims(rows: u32, cols: u32) -> Result<Torus, ConfigError> {
    let torus = Torus::new(rows, cols)?;
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or(ConfigError::CellCountOverflow { rows, cols })?;
    Ok(torus)
}
