//! The step loop: evolve, publish, wait

use super::builder::SimulationBuilder;
use super::display::{Display, DisplaySet};
use crate::game_of_life::{GameOfLifeRules, Grid};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Immutable parameters of a simulation
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Pause between consecutive steps
    pub interval: Duration,
    /// Generations advanced by one `run`
    pub max_steps: usize,
    pub initial_generation: Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Built,
    Running,
    Completed,
}

/// A configured automaton plus the displays watching it
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    displays: DisplaySet,
    current: Arc<Grid>,
    steps_taken: usize,
    state: SimulationState,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub(crate) fn new(config: SimulationConfig) -> Self {
        let current = Arc::new(config.initial_generation.clone());
        Self {
            config,
            displays: DisplaySet::new(),
            current,
            steps_taken: 0,
            state: SimulationState::Built,
        }
    }

    /// Register a display. Attaching the same instance twice has no effect.
    pub fn attach(&mut self, display: Arc<dyn Display>) {
        if !self.displays.insert(display) {
            debug!("display already attached");
        }
    }

    /// Advance `max_steps` generations from the initial one, refreshing every
    /// display after each step and sleeping `interval` between steps.
    pub fn run(&mut self) {
        let SimulationConfig { interval, max_steps, .. } = self.config;
        let start = Instant::now();

        self.state = SimulationState::Running;
        self.current = Arc::new(self.config.initial_generation.clone());
        self.steps_taken = 0;

        info!(
            max_steps,
            interval_ms = interval.as_millis() as u64,
            displays = self.displays.len(),
            "simulation started"
        );

        for step in 1..=max_steps {
            if step > 1 {
                std::thread::sleep(interval);
            }

            self.current = Arc::new(GameOfLifeRules::evolve(&self.current));
            self.steps_taken = step;
            debug!(step, living = self.current.living_count(), "generation computed");

            self.displays.notify(&self.current);
        }

        self.state = SimulationState::Completed;
        info!(
            steps = self.steps_taken,
            living = self.current.living_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "simulation completed"
        );
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// The latest generation; the initial one before `run`
    pub fn current_generation(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    pub fn display_count(&self) -> usize {
        self.displays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDisplay {
        generations: Mutex<Vec<Arc<Grid>>>,
    }

    impl MockDisplay {
        fn lifecycle(&self) -> usize {
            self.generations.lock().unwrap().len()
        }

        fn last(&self) -> Option<Arc<Grid>> {
            self.generations.lock().unwrap().last().cloned()
        }
    }

    impl Display for MockDisplay {
        fn refresh(&self, generation: &Arc<Grid>) {
            self.generations.lock().unwrap().push(Arc::clone(generation));
        }
    }

    fn simulation(initial: &Grid, max_steps: usize) -> Simulation {
        Simulation::builder()
            .with_interval(1)
            .unwrap()
            .with_max_steps(max_steps)
            .unwrap()
            .with_pattern(initial)
            .build()
            .unwrap()
    }

    #[test]
    fn test_one_refresh_per_step() {
        for max_steps in [1, 2, 5] {
            let display = Arc::new(MockDisplay::default());
            let mut game = simulation(&Grid::new(5, 5).unwrap(), max_steps);
            game.attach(display.clone());

            game.run();

            assert_eq!(display.lifecycle(), max_steps);
            assert_eq!(game.steps_taken(), max_steps);
            assert_eq!(game.state(), SimulationState::Completed);
        }
    }

    #[test]
    fn test_generation_keeps_size() {
        for size in [1, 2, 5] {
            let display = Arc::new(MockDisplay::default());
            let mut game = simulation(&Grid::new(size, size).unwrap(), 3);
            game.attach(display.clone());

            game.run();

            let generation = display.last().unwrap();
            assert_eq!(generation.width(), size);
            assert_eq!(generation.height(), size);
        }
    }

    #[test]
    fn test_displays_receive_evolved_generations() {
        let blinker = Grid::from_living(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        let display = Arc::new(MockDisplay::default());
        let mut game = simulation(&blinker, 2);
        game.attach(display.clone());

        game.run();

        let generations = display.generations.lock().unwrap();
        assert_eq!(generations[0].living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(*generations[1], blinker);
        assert!(Arc::ptr_eq(&generations[1], &game.current_generation()));
    }

    #[test]
    fn test_duplicate_attach_is_noop() {
        let display = Arc::new(MockDisplay::default());
        let mut game = simulation(&Grid::new(3, 3).unwrap(), 4);
        game.attach(display.clone());
        game.attach(display.clone());
        assert_eq!(game.display_count(), 1);

        game.run();
        assert_eq!(display.lifecycle(), 4);
    }

    #[test]
    fn test_every_display_is_notified() {
        let first = Arc::new(MockDisplay::default());
        let second = Arc::new(MockDisplay::default());
        let mut game = simulation(&Grid::new(3, 3).unwrap(), 3);
        game.attach(first.clone());
        game.attach(second.clone());

        game.run();

        assert_eq!(first.lifecycle(), 3);
        assert_eq!(second.lifecycle(), 3);
    }

    #[test]
    fn test_display_shared_between_simulations() {
        let display = Arc::new(MockDisplay::default());
        let mut a = simulation(&Grid::new(3, 3).unwrap(), 2);
        let mut b = simulation(&Grid::new(4, 4).unwrap(), 3);
        a.attach(display.clone());
        b.attach(display.clone());

        a.run();
        b.run();

        assert_eq!(display.lifecycle(), 5);
    }

    #[test]
    fn test_run_restarts_from_initial_generation() {
        let glider = Grid::from_living(8, 8, [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();
        let mut game = simulation(&glider, 4);
        assert_eq!(game.state(), SimulationState::Built);
        assert_eq!(*game.current_generation(), glider);

        game.run();
        let first = game.current_generation();
        game.run();

        assert_eq!(*game.current_generation(), *first);
        assert_ne!(*first, glider);
    }

    #[test]
    fn test_run_without_displays() {
        let mut game = simulation(&Grid::new(2, 2).unwrap(), 2);
        game.run();
        assert_eq!(game.steps_taken(), 2);
    }
}
