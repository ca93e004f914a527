//! Reading and writing LIF 1.06 pattern files
//!
//! A pattern file lists one live cell per line as `x y`. Lines starting
//! with `#` are comments and empty lines are skipped.

use super::Grid;
use crate::error::{LifeError, ParseError, Result};
use itertools::{Itertools, MinMaxResult};
use std::path::Path;
use tracing::debug;

const COMMENT_INDICATOR: char = '#';
const LIF_HEADER: &str = "#Life 1.06";

/// A live cell position in the unbounded source coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Load a LIF file and lay it out on a grid with `padding` dead cells around it.
///
/// Padding and path are checked before the file is touched. Read failures
/// come back as [`LifeError::Io`] unchanged.
pub fn load_lif_from_file<P: AsRef<Path>>(path: P, padding: i32) -> Result<Grid> {
    let path = path.as_ref();
    let padding = check_input_parameters(path, padding)?;

    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let grid = parse_lif_from_string(&content, &name, padding)?;
    debug!(
        file = %path.display(),
        width = grid.width(),
        height = grid.height(),
        living = grid.living_count(),
        "loaded pattern"
    );
    Ok(grid)
}

/// Parse LIF content into a padded grid. `name` only shows up in errors.
pub fn parse_lif_from_string(content: &str, name: &str, padding: usize) -> Result<Grid> {
    let coordinates = parse_coordinates(content)?;

    if coordinates.is_empty() {
        return Err(ParseError::NoCells { name: name.to_string() }.into());
    }

    grid_from_coordinates(&coordinates, padding)
}

/// Extract every coordinate line, skipping comments and empty lines
pub fn parse_coordinates(content: &str) -> std::result::Result<Vec<Coordinate>, ParseError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_INDICATOR))
        .map(|(idx, line)| parse_coordinate_line(line, idx + 1))
        .collect()
}

/// Parse a single `x y` line.
///
/// The line must be exactly an optionally negative integer, whitespace, and
/// another optionally negative integer. Anything else is an invalid line; a
/// well-shaped line whose numbers overflow `i32` is an invalid coordinate.
pub fn parse_coordinate_line(
    line: &str,
    line_number: usize,
) -> std::result::Result<Coordinate, ParseError> {
    let invalid_line = || ParseError::InvalidLine {
        line_number,
        line: line.to_string(),
    };

    if line.trim() != line {
        return Err(invalid_line());
    }

    let (x, y) = match line.split_whitespace().collect_tuple() {
        Some((x, y)) if is_integer_token(x) && is_integer_token(y) => (x, y),
        _ => return Err(invalid_line()),
    };

    let invalid_coordinate = |_: std::num::ParseIntError| ParseError::InvalidCoordinate {
        line_number,
        line: line.to_string(),
    };
    Ok(Coordinate::new(
        x.parse().map_err(invalid_coordinate)?,
        y.parse().map_err(invalid_coordinate)?,
    ))
}

fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize coordinates onto a grid.
///
/// The bounding box max is widened by `2 * padding` while the min is left
/// alone, then each cell is shifted by `padding`. The smallest coordinate
/// lands on `(padding, padding)` and there are `padding` dead cells on every
/// side.
pub fn grid_from_coordinates(coordinates: &[Coordinate], padding: usize) -> Result<Grid> {
    let (min_x, max_x) = bounds(coordinates.iter().map(|c| c.x))?;
    let (min_y, max_y) = bounds(coordinates.iter().map(|c| c.y))?;

    let padding_i64 = i64::try_from(padding)
        .map_err(|_| LifeError::Configuration(format!("Padding {} is too large", padding)))?;
    let max_x = max_x + padding_i64 * 2;
    let max_y = max_y + padding_i64 * 2;

    let width = to_extent(max_x - min_x + 1, "width")?;
    let height = to_extent(max_y - min_y + 1, "height")?;

    // Offsets from the minimum are bounded by the extent, so they fit in usize
    let living = coordinates.iter().map(|c| {
        let col = (i64::from(c.x) - min_x) as usize + padding;
        let row = (i64::from(c.y) - min_y) as usize + padding;
        (row, col)
    });

    Grid::from_living(width, height, living)
}

fn bounds(values: impl Iterator<Item = i32>) -> Result<(i64, i64)> {
    match values.minmax() {
        MinMaxResult::NoElements => Err(LifeError::Configuration(
            "Cannot lay out a pattern without cells".into(),
        )),
        MinMaxResult::OneElement(v) => Ok((i64::from(v), i64::from(v))),
        MinMaxResult::MinMax(min, max) => Ok((i64::from(min), i64::from(max))),
    }
}

fn to_extent(extent: i64, axis: &str) -> Result<usize> {
    usize::try_from(extent)
        .map_err(|_| LifeError::Configuration(format!("Pattern {} {} is out of range", axis, extent)))
}

fn check_input_parameters(path: &Path, padding: i32) -> Result<usize> {
    if path.as_os_str().is_empty() {
        return Err(LifeError::Configuration("Path may not be empty".into()));
    }
    usize::try_from(padding)
        .map_err(|_| LifeError::Configuration("Padding may not be negative".into()))
}

/// Convert a grid to LIF 1.06 text, one `x y` line per living cell
pub fn grid_to_lif(grid: &Grid) -> String {
    let mut result = String::from(LIF_HEADER);
    result.push('\n');

    for (row, col) in grid.living_cells() {
        result.push_str(&format!("{} {}\n", col, row));
    }

    result
}

/// Save a grid to a LIF file, creating parent directories as needed
pub fn save_lif_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_lif(grid))
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))?;

    Ok(())
}
