//! Display and output formatting utilities

use crate::config::RenderStyle;
use crate::game_of_life::Grid;
use crate::simulation::Display;
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1) * 3);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if grid.get(y, x) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid.get(y, x) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Size, population and density on one line
    pub fn format_statistics(grid: &Grid) -> String {
        format!(
            "{}x{} grid, {} living cells ({:.1}% density)",
            grid.width(),
            grid.height(),
            grid.living_count(),
            grid.density() * 100.0
        )
    }
}

#[derive(Serialize)]
struct GenerationRecord {
    generation: usize,
    width: usize,
    height: usize,
    living: Vec<(usize, usize)>,
}

impl GenerationRecord {
    fn new(generation: usize, grid: &Grid) -> Self {
        Self {
            generation,
            width: grid.width(),
            height: grid.height(),
            // (x, y) like the pattern files
            living: grid.living_cells().into_iter().map(|(row, col)| (col, row)).collect(),
        }
    }
}

struct ConsoleState<W> {
    out: W,
    refreshes: usize,
}

/// Renders each generation to a writer, stdout in the CLI
pub struct ConsoleDisplay<W: Write> {
    state: Mutex<ConsoleState<W>>,
    style: RenderStyle,
    clear_screen: bool,
}

impl ConsoleDisplay<std::io::Stdout> {
    pub fn stdout(style: RenderStyle, clear_screen: bool) -> Self {
        Self::new(std::io::stdout(), style, clear_screen)
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, style: RenderStyle, clear_screen: bool) -> Self {
        Self {
            state: Mutex::new(ConsoleState { out, refreshes: 0 }),
            style,
            clear_screen,
        }
    }

    /// Number of generations rendered so far
    pub fn refreshes(&self) -> usize {
        self.state.lock().map(|state| state.refreshes).unwrap_or(0)
    }

    /// Give back the writer, e.g. to inspect a buffer
    pub fn into_inner(self) -> Option<W> {
        self.state.into_inner().ok().map(|state| state.out)
    }

    fn render(&self, generation: usize, grid: &Grid) -> String {
        match self.style {
            RenderStyle::Compact => format!(
                "Generation {} (living: {}):\n{}",
                generation,
                grid.living_count(),
                GridFormatter::format_grid_compact(grid)
            ),
            RenderStyle::Coordinates => format!(
                "Generation {} (living: {}):\n{}",
                generation,
                grid.living_count(),
                GridFormatter::format_grid_with_coords(grid)
            ),
            RenderStyle::Json => match serde_json::to_string(&GenerationRecord::new(generation, grid)) {
                Ok(line) => format!("{}\n", line),
                Err(e) => {
                    warn!("failed to serialize generation {}: {}", generation, e);
                    String::new()
                }
            },
        }
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn refresh(&self, generation: &Arc<Grid>) {
        let Ok(mut state) = self.state.lock() else {
            warn!("console display lock poisoned, skipping generation");
            return;
        };
        state.refreshes += 1;
        let rendered = self.render(state.refreshes, generation);

        let clear = self.clear_screen && self.style != RenderStyle::Json;
        if let Err(e) = write_frame(&mut state.out, clear, &rendered) {
            warn!("failed to render generation {}: {}", state.refreshes, e);
        }
    }
}

fn write_frame<W: Write>(out: &mut W, clear: bool, rendered: &str) -> std::io::Result<()> {
    if clear {
        // ANSI: erase screen, cursor home
        write!(out, "\x1b[2J\x1b[H")?;
    }
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = sample();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_statistics() {
        let stats = GridFormatter::format_statistics(&sample());
        assert_eq!(stats, "3x3 grid, 5 living cells (55.6% density)");
    }

    #[test]
    fn test_console_display_counts_generations() {
        let display = ConsoleDisplay::new(Vec::new(), RenderStyle::Compact, false);
        let grid = Arc::new(sample());
        display.refresh(&grid);
        display.refresh(&grid);
        assert_eq!(display.refreshes(), 2);

        let out = String::from_utf8(display.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("Generation 1 (living: 5):\n█·█\n"));
        assert!(out.contains("Generation 2 (living: 5):"));
    }

    #[test]
    fn test_console_display_json_lines() {
        let display = ConsoleDisplay::new(Vec::new(), RenderStyle::Json, true);
        let grid = Arc::new(Grid::from_living(3, 2, [(1, 2)]).unwrap());
        display.refresh(&grid);

        let out = String::from_utf8(display.into_inner().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["generation"], 1);
        assert_eq!(value["width"], 3);
        assert_eq!(value["height"], 2);
        assert_eq!(value["living"], serde_json::json!([[2, 1]]));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Yellow);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
