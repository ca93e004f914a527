//! Game of Life Simulator
//!
//! Loads a LIF 1.06 pattern into a padded grid, steps it a fixed number of
//! generations under Conway's rules and hands each generation to the
//! attached displays.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, ParseError};
pub use game_of_life::{Grid, LifPattern, Pattern};
pub use simulation::{Display, Simulation};

use std::sync::Arc;

/// Load `path` with `padding`, run it for `max_steps` generations, and
/// notify `displays` after each one. Returns the final generation.
pub fn simulate_file<P: AsRef<std::path::Path>>(
    path: P,
    padding: i32,
    interval_ms: u64,
    max_steps: usize,
    displays: &[Arc<dyn Display>],
) -> error::Result<Arc<Grid>> {
    let pattern = LifPattern::from_file(path, padding)?;
    let mut simulation = Simulation::builder()
        .with_interval(interval_ms)?
        .with_max_steps(max_steps)?
        .with_pattern(&pattern)
        .build()?;

    for display in displays {
        simulation.attach(Arc::clone(display));
    }
    simulation.run();

    Ok(simulation.current_generation())
}
