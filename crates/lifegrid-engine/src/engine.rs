//! The Game of Life engine.
//!
//! [`LifeEngine`] is the single stateful type of the crate. It owns the
//! grid and the generation counter; everything else reads it through
//! bounded accessors or detached [`GridSnapshot`]s.
//!
//! # Ownership model
//!
//! `LifeEngine` is [`Send`] (can be moved to a driver thread) and every
//! mutating method takes `&mut self`, so calls are serialized by the
//! borrow checker. Callers that need to share an engine wrap it in their
//! own lock. A step always runs to completion before the method returns:
//! no partially computed generation is ever observable.

use std::fmt;
use std::time::Instant;

use lifegrid_core::{CellCoord, CellReader, Generation};
use lifegrid_space::Torus;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::buffer::CellBuffers;
use crate::config::{validate_dims, ConfigError, DensityLevel, LifeConfig};
use crate::metrics::StepMetrics;
use crate::rule::{live_neighbours, next_state};
use crate::seed::seed_cells;
use crate::snapshot::GridSnapshot;

// Compile-time assertion: LifeEngine can be handed to a driver thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LifeEngine>();
    }
};

/// Conway's Game of Life on a fixed-size toroidal grid.
///
/// Created once with its dimensions and initial population, then driven
/// by repeated [`advance()`](Self::advance) calls interleaved with point
/// edits ([`set_cell_alive`](Self::set_cell_alive),
/// [`set_cell_dead`](Self::set_cell_dead)) and reads
/// ([`current_generation`](Self::current_generation),
/// [`is_alive`](CellReader::is_alive)).
///
/// # Example
///
/// ```
/// use lifegrid_core::{CellReader, Generation};
/// use lifegrid_engine::{DensityLevel, LifeEngine};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut engine = LifeEngine::new(32, 48, DensityLevel(5), &mut rng).unwrap();
/// engine.advance();
/// let snapshot = engine.current_generation();
/// assert_eq!(snapshot.generation(), Generation(1));
/// assert_eq!((snapshot.width(), snapshot.height()), (48, 32));
/// ```
pub struct LifeEngine {
    torus: Torus,
    buffers: CellBuffers,
    generation: Generation,
    last_metrics: StepMetrics,
}

impl LifeEngine {
    /// Create an engine with `height` rows and `width` columns, seeded at
    /// `density` from `rng`.
    ///
    /// Each cell is drawn independently (see [`DensityLevel`]). The
    /// generation counter starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Space`] if either dimension is zero or
    /// exceeds `i32::MAX`, and [`ConfigError::CellCountOverflow`] if the
    /// grid cannot be addressed on this platform.
    pub fn new<R: Rng + ?Sized>(
        height: u32,
        width: u32,
        density: DensityLevel,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let torus = validate_dims(height, width)?;
        let cells = seed_cells(rng, density, torus.cell_count());
        let engine = Self::from_parts(torus, cells);
        tracing::debug!(
            rows = height,
            cols = width,
            density = density.level(),
            population = engine.population(),
            "seeded life grid"
        );
        Ok(engine)
    }

    /// Create an engine from a [`LifeConfig`], seeding a ChaCha8 generator
    /// from `config.seed`.
    ///
    /// Equal configs always produce equal starting grids.
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::new(config.rows, config.cols, config.density, &mut rng)
    }

    /// Create an engine whose grid is dead except for `alive`.
    ///
    /// # Errors
    ///
    /// In addition to the dimension errors of [`new`](Self::new), returns
    /// [`ConfigError::PatternOutOfBounds`] for the first listed cell that
    /// lies outside the grid.
    pub fn from_pattern<I>(height: u32, width: u32, alive: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<CellCoord>,
    {
        let torus = validate_dims(height, width)?;
        let mut cells = vec![false; torus.cell_count()];
        for coord in alive {
            let coord = coord.into();
            let i = torus
                .rank(coord.x, coord.y)
                .ok_or(ConfigError::PatternOutOfBounds { coord })?;
            cells[i] = true;
        }
        let engine = Self::from_parts(torus, cells);
        tracing::debug!(
            rows = height,
            cols = width,
            population = engine.population(),
            "built life grid from pattern"
        );
        Ok(engine)
    }

    fn from_parts(torus: Torus, cells: Vec<bool>) -> Self {
        Self {
            torus,
            buffers: CellBuffers::new(cells),
            generation: Generation::ZERO,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Advance one generation.
    ///
    /// Every cell of the next generation is computed from the untouched
    /// current generation, then the two buffers swap and the generation
    /// counter increments by one. Returns the step's [`StepMetrics`].
    pub fn advance(&mut self) -> StepMetrics {
        let start = Instant::now();
        let torus = self.torus;
        let cols = torus.cols() as usize;
        let (current, next) = self.buffers.split();

        let mut births = 0;
        let mut deaths = 0;
        let mut population = 0;
        for y in 0..torus.rows() as i32 {
            let row_base = (y as usize) * cols;
            for x in 0..torus.cols() as i32 {
                let i = row_base + x as usize;
                let was_alive = current[i];
                let alive = next_state(was_alive, live_neighbours(current, &torus, x, y));
                next[i] = alive;
                match (was_alive, alive) {
                    (false, true) => births += 1,
                    (true, false) => deaths += 1,
                    _ => {}
                }
                if alive {
                    population += 1;
                }
            }
        }

        self.buffers.publish();
        self.generation = self.generation.next();
        self.last_metrics = StepMetrics {
            generation: self.generation,
            births,
            deaths,
            population,
            total_us: start.elapsed().as_micros() as u64,
        };
        tracing::trace!(
            generation = %self.generation,
            births,
            deaths,
            population,
            "advanced generation"
        );
        self.last_metrics
    }

    /// Advance `n` generations, returning the metrics of the last one.
    ///
    /// With `n == 0` nothing happens and the previous metrics are returned.
    pub fn advance_by(&mut self, n: u64) -> StepMetrics {
        for _ in 0..n {
            self.advance();
        }
        self.last_metrics
    }

    /// Set the cell at `(x, y)` to `alive`.
    ///
    /// Coordinates outside the grid are ignored: the call does nothing and
    /// reports nothing. Front ends rely on this to pass coordinates derived
    /// from pointer positions without clipping them first.
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        match self.torus.rank(x, y) {
            Some(i) => self.buffers.current_mut()[i] = alive,
            None => tracing::trace!(x, y, alive, "ignored out-of-range cell mutation"),
        }
    }

    /// Make the cell at `(x, y)` alive. Out-of-range coordinates are ignored.
    pub fn set_cell_alive(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, true);
    }

    /// Make the cell at `(x, y)` dead. Out-of-range coordinates are ignored.
    pub fn set_cell_dead(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, false);
    }

    /// An independent copy of the current generation.
    pub fn current_generation(&self) -> GridSnapshot {
        GridSnapshot::new(self.torus, self.generation, self.buffers.current().to_vec())
    }

    /// The grid topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Metrics from the most recent [`advance()`](Self::advance).
    ///
    /// All zero until the first step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl CellReader for LifeEngine {
    fn width(&self) -> u32 {
        self.torus.cols()
    }

    fn height(&self) -> u32 {
        self.torus.rows()
    }

    fn generation(&self) -> Generation {
        self.generation
    }

    fn is_alive(&self, x: i32, y: i32) -> Option<bool> {
        self.torus.rank(x, y).map(|i| self.buffers.current()[i])
    }

    fn population(&self) -> usize {
        self.buffers.current().iter().filter(|c| **c).count()
    }
}

impl fmt::Debug for LifeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifeEngine")
            .field("width", &self.torus.cols())
            .field("height", &self.torus.rows())
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_space::SpaceError;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn new_starts_at_generation_zero() {
        let e = LifeEngine::new(8, 12, DensityLevel(5), &mut rng()).unwrap();
        assert_eq!(e.generation(), Generation::ZERO);
        assert_eq!((e.width(), e.height()), (12, 8));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            LifeEngine::new(0, 5, DensityLevel(5), &mut rng()).unwrap_err(),
            ConfigError::Space(SpaceError::EmptySpace)
        );
        assert_eq!(
            LifeEngine::new(5, 0, DensityLevel(5), &mut rng()).unwrap_err(),
            ConfigError::Space(SpaceError::EmptySpace)
        );
    }

    #[test]
    fn from_config_is_reproducible() {
        let cfg = LifeConfig {
            rows: 20,
            cols: 30,
            density: DensityLevel(6),
            seed: 1234,
        };
        let a = LifeEngine::from_config(&cfg).unwrap();
        let b = LifeEngine::from_config(&cfg).unwrap();
        assert_eq!(a.current_generation(), b.current_generation());
    }

    #[test]
    fn different_seeds_differ() {
        let base = LifeConfig {
            rows: 20,
            cols: 30,
            density: DensityLevel(5),
            seed: 1,
        };
        let other = LifeConfig { seed: 2, ..base.clone() };
        assert_ne!(
            LifeEngine::from_config(&base).unwrap().current_generation(),
            LifeEngine::from_config(&other).unwrap().current_generation()
        );
    }

    #[test]
    fn from_pattern_sets_only_listed_cells() {
        let e = LifeEngine::from_pattern(4, 4, [(1, 2), (3, 0)]).unwrap();
        assert_eq!(e.population(), 2);
        assert_eq!(e.is_alive(1, 2), Some(true));
        assert_eq!(e.is_alive(3, 0), Some(true));
        assert_eq!(e.is_alive(0, 0), Some(false));
    }

    #[test]
    fn from_pattern_rejects_out_of_range_cells() {
        let err = LifeEngine::from_pattern(4, 4, [(4, 0)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PatternOutOfBounds {
                coord: CellCoord::new(4, 0)
            }
        );
    }

    #[test]
    fn advance_reports_births_and_deaths() {
        // Horizontal blinker: two ends die, two cells above/below are born.
        let mut e = LifeEngine::from_pattern(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let m = e.advance();
        assert_eq!(m.generation, Generation(1));
        assert_eq!(m.births, 2);
        assert_eq!(m.deaths, 2);
        assert_eq!(m.population, 3);
        assert_eq!(e.last_metrics(), &m);
    }

    #[test]
    fn advance_by_zero_is_noop() {
        let mut e = LifeEngine::from_pattern(3, 3, [(0, 0)]).unwrap();
        e.advance_by(0);
        assert_eq!(e.generation(), Generation::ZERO);
        assert_eq!(e.population(), 1);
    }

    #[test]
    fn set_and_clear_in_range() {
        let mut e = LifeEngine::from_pattern(3, 3, std::iter::empty::<CellCoord>()).unwrap();
        e.set_cell_alive(2, 1);
        assert_eq!(e.is_alive(2, 1), Some(true));
        e.set_cell_dead(2, 1);
        assert_eq!(e.is_alive(2, 1), Some(false));
    }

    #[test]
    fn mutation_does_not_touch_generation() {
        let mut e = LifeEngine::from_pattern(3, 3, [(0, 0)]).unwrap();
        e.set_cell_alive(1, 1);
        assert_eq!(e.generation(), Generation::ZERO);
    }

    #[test]
    fn debug_shows_summary() {
        let e = LifeEngine::from_pattern(2, 3, [(0, 0)]).unwrap();
        let s = format!("{e:?}");
        assert!(s.contains("width: 3"));
        assert!(s.contains("population: 1"));
    }
}
