//! Sources of an initial generation

use super::io::{grid_from_coordinates, load_lif_from_file, Coordinate};
use super::Grid;
use crate::error::{LifeError, Result};
use std::path::{Path, PathBuf};

/// Anything that can produce the first generation of a simulation
pub trait Pattern {
    fn start_generation(&self) -> Grid;
}

/// A grid is its own starting point
impl Pattern for Grid {
    fn start_generation(&self) -> Grid {
        self.clone()
    }
}

/// Pattern backed by a LIF 1.06 file. The file is read once, on construction.
#[derive(Debug, Clone)]
pub struct LifPattern {
    source: PathBuf,
    generation: Grid,
}

impl LifPattern {
    pub fn from_file<P: AsRef<Path>>(path: P, padding: i32) -> Result<Self> {
        let generation = load_lif_from_file(&path, padding)?;
        Ok(Self {
            source: path.as_ref().to_path_buf(),
            generation,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Pattern for LifPattern {
    fn start_generation(&self) -> Grid {
        self.generation.clone()
    }
}

/// In-memory list of live coordinates, laid out like a LIF file would be
#[derive(Debug, Clone)]
pub struct CellsPattern {
    generation: Grid,
}

impl CellsPattern {
    pub fn new(cells: &[(i32, i32)], padding: i32) -> Result<Self> {
        let padding = usize::try_from(padding)
            .map_err(|_| LifeError::Configuration("Padding may not be negative".into()))?;
        let coordinates: Vec<Coordinate> = cells.iter().map(|&(x, y)| Coordinate::new(x, y)).collect();
        if coordinates.is_empty() {
            return Err(LifeError::Configuration("Pattern needs at least one cell".into()));
        }

        Ok(Self {
            generation: grid_from_coordinates(&coordinates, padding)?,
        })
    }
}

impl Pattern for CellsPattern {
    fn start_generation(&self) -> Grid {
        self.generation.clone()
    }
}

/// Named pattern shipped with the binary, coordinates as `(x, y)`
pub struct BuiltinPattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl BuiltinPattern {
    pub fn with_padding(&self, padding: i32) -> Result<CellsPattern> {
        CellsPattern::new(self.cells, padding)
    }
}

pub const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    BuiltinPattern {
        name: "blinker",
        cells: &[(0, 1), (1, 1), (2, 1)],
    },
    BuiltinPattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    BuiltinPattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    BuiltinPattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    BuiltinPattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Look up a built-in pattern by name, ignoring case
pub fn find_builtin(name: &str) -> Option<&'static BuiltinPattern> {
    BUILTIN_PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
