//! Validating builder for [`Simulation`]

use super::driver::{Simulation, SimulationConfig};
use crate::error::{LifeError, Result};
use crate::game_of_life::{Grid, Pattern};
use std::time::Duration;

/// Collects simulation parameters.
///
/// Out-of-range values are rejected by the setter that receives them;
/// missing values are reported by [`SimulationBuilder::build`].
#[derive(Debug, Default, Clone)]
pub struct SimulationBuilder {
    interval: Option<u64>,
    max_steps: Option<usize>,
    initial_generation: Option<Grid>,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay between steps, in milliseconds
    pub fn with_interval(mut self, interval: u64) -> Result<Self> {
        if interval < 1 {
            return Err(LifeError::Configuration(format!(
                "Interval must be positive, got {}",
                interval
            )));
        }
        self.interval = Some(interval);
        Ok(self)
    }

    /// Number of generations to advance
    pub fn with_max_steps(mut self, max_steps: usize) -> Result<Self> {
        if max_steps < 1 {
            return Err(LifeError::Configuration(format!(
                "Max steps must be positive, got {}",
                max_steps
            )));
        }
        self.max_steps = Some(max_steps);
        Ok(self)
    }

    /// Take the start generation from `pattern` right away
    pub fn with_pattern<P: Pattern + ?Sized>(mut self, pattern: &P) -> Self {
        self.initial_generation = Some(pattern.start_generation());
        self
    }

    pub fn build(self) -> Result<Simulation> {
        let interval = self
            .interval
            .ok_or_else(|| LifeError::State("Interval has not been set".into()))?;
        let max_steps = self
            .max_steps
            .ok_or_else(|| LifeError::State("Max steps have not been set".into()))?;
        let initial_generation = self
            .initial_generation
            .ok_or_else(|| LifeError::State("Pattern has not been set".into()))?;

        Ok(Simulation::new(SimulationConfig {
            interval: Duration::from_millis(interval),
            max_steps,
            initial_generation,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Grid {
        Grid::new(5, 5).unwrap()
    }

    #[test]
    fn test_build_with_all_fields() {
        let simulation = SimulationBuilder::new()
            .with_interval(1000)
            .unwrap()
            .with_max_steps(3)
            .unwrap()
            .with_pattern(&pattern())
            .build()
            .unwrap();

        assert_eq!(simulation.config().interval, Duration::from_millis(1000));
        assert_eq!(simulation.config().max_steps, 3);
        assert_eq!(simulation.config().initial_generation, pattern());
    }

    #[test]
    fn test_zero_values_rejected_immediately() {
        assert!(SimulationBuilder::new().with_interval(0).unwrap_err().is_configuration());
        assert!(SimulationBuilder::new().with_max_steps(0).unwrap_err().is_configuration());
    }

    #[test]
    fn test_missing_interval() {
        let err = SimulationBuilder::new()
            .with_max_steps(3)
            .unwrap()
            .with_pattern(&pattern())
            .build()
            .unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn test_missing_max_steps() {
        let err = SimulationBuilder::new()
            .with_interval(1000)
            .unwrap()
            .with_pattern(&pattern())
            .build()
            .unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn test_missing_pattern() {
        let err = SimulationBuilder::new()
            .with_interval(1000)
            .unwrap()
            .with_max_steps(3)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn test_later_setter_overrides_earlier() {
        let simulation = SimulationBuilder::new()
            .with_interval(5)
            .and_then(|b| b.with_interval(7))
            .and_then(|b| b.with_max_steps(1))
            .map(|b| b.with_pattern(&pattern()))
            .and_then(SimulationBuilder::build)
            .unwrap();
        assert_eq!(simulation.config().interval, Duration::from_millis(7));
    }
}
