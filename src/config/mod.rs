//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    Settings, SimulationSettings, PatternSettings, DisplaySettings, RenderStyle, CliOverrides
};
