//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;
pub mod pattern;

pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use io::{load_lif_from_file, parse_lif_from_string, save_lif_to_file, grid_to_lif, Coordinate};
pub use pattern::{Pattern, LifPattern, CellsPattern, BuiltinPattern, BUILTIN_PATTERNS, find_builtin};
