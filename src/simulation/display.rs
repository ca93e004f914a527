//! Observers of a running simulation

use crate::game_of_life::Grid;
use std::sync::Arc;

/// Receives every generation produced by a simulation.
///
/// `refresh` runs synchronously inside the step loop, so implementations
/// should return promptly. The grid is shared and never mutated after it is
/// handed out; keep the `Arc` to retain a snapshot.
pub trait Display {
    fn refresh(&self, generation: &Arc<Grid>);
}

/// Attached displays in insertion order, each instance at most once
#[derive(Default, Clone)]
pub struct DisplaySet {
    displays: Vec<Arc<dyn Display>>,
}

impl std::fmt::Debug for DisplaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySet")
            .field("len", &self.displays.len())
            .finish()
    }
}

impl DisplaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a display; returns `false` if this exact instance is already present
    pub fn insert(&mut self, display: Arc<dyn Display>) -> bool {
        if self.contains(&display) {
            return false;
        }
        self.displays.push(display);
        true
    }

    pub fn contains(&self, display: &Arc<dyn Display>) -> bool {
        self.displays
            .iter()
            .any(|existing| std::ptr::addr_eq(Arc::as_ptr(existing), Arc::as_ptr(display)))
    }

    /// Refresh every display, in attach order, with the same generation
    pub fn notify(&self, generation: &Arc<Grid>) {
        for display in &self.displays {
            display.refresh(generation);
        }
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}
