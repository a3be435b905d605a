//! lifegrid quickstart: seed a grid, run it, paint into it, print it.
//!
//! Demonstrates:
//!   1. Building a `LifeConfig` sized for a canvas through a `Viewport`
//!   2. Constructing a seeded `LifeEngine`
//!   3. Stepping and reading `StepMetrics`
//!   4. Painting cells by pixel position between steps
//!   5. Taking a detached snapshot and rendering it as text
//!
//! Run with:
//!   RUST_LOG=lifegrid_engine=trace cargo run -p lifegrid-engine --example quickstart

use lifegrid_core::CellReader;
use lifegrid_engine::{DensityLevel, LifeEngine, PaintMode, Viewport};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ─── Canvas parameters ──────────────────────────────────────────

const CANVAS_WIDTH: u32 = 320;
const CANVAS_HEIGHT: u32 = 120;
const RESOLUTION: u32 = 8;
const SEED: u64 = 2024;
const STEPS: u64 = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let viewport = Viewport::new(RESOLUTION)?;
    let config =
        viewport.config_for_canvas(CANVAS_WIDTH, CANVAS_HEIGHT, DensityLevel::DEFAULT, SEED);
    let mut engine = LifeEngine::from_config(&config)?;
    info!(
        rows = config.rows,
        cols = config.cols,
        population = engine.population(),
        "engine ready"
    );

    for _ in 0..STEPS {
        let m = engine.advance();
        info!(
            generation = %m.generation,
            births = m.births,
            deaths = m.deaths,
            population = m.population,
            "step"
        );
    }

    // Drag a horizontal line across row 2, running off the right edge.
    for px in (0..CANVAS_WIDTH as i32 + 40).step_by(RESOLUTION as usize) {
        viewport.paint(&mut engine, px, 2 * RESOLUTION as i32 + 1, PaintMode::Draw);
    }

    let snapshot = engine.current_generation();
    engine.advance();

    println!("generation {}:", snapshot.generation());
    println!("{snapshot}");
    println!(
        "{} live cells -> {} after one more step",
        snapshot.population(),
        engine.population()
    );
    Ok(())
}
