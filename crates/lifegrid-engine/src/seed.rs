//! Random initial population.

use rand::Rng;

use crate::config::DensityLevel;

/// Draw `count` independent cells, each alive with `density` chance.
///
/// Every cell takes one uniform draw from `[0, 100)` and is alive when
/// the draw falls below [`DensityLevel::percent`], so the same generator
/// state always yields the same grid.
pub(crate) fn seed_cells<R: Rng + ?Sized>(
    rng: &mut R,
    density: DensityLevel,
    count: usize,
) -> Vec<bool> {
    let threshold = density.percent();
    (0..count).map(|_| rng.gen_range(0..100u32) < threshold).collect()
}
