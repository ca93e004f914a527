//! Simulation driver, its builder, and the display observers it notifies

pub mod builder;
pub mod display;
pub mod driver;

pub use builder::SimulationBuilder;
pub use display::{Display, DisplaySet};
pub use driver::{Simulation, SimulationConfig, SimulationState};
