//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, RenderStyle, Settings},
    game_of_life::{find_builtin, save_lif_to_file, LifPattern, Pattern, BUILTIN_PATTERNS},
    simulation::{Display, Simulation},
    utils::{ColorOutput, ConsoleDisplay, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life simulator for LIF 1.06 patterns")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// LIF pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Built-in pattern name (overrides config and --pattern)
        #[arg(short, long)]
        builtin: Option<String>,

        /// Dead cells around the pattern (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        padding: Option<i32>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Output style (overrides config)
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Load a pattern and print it without stepping
    Show {
        /// LIF pattern file
        pattern: PathBuf,

        /// Dead cells around the pattern
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        padding: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Rendered generations go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            config, pattern, builtin, padding, steps, interval, style
        } => {
            let overrides = CliOverrides {
                interval_ms: interval,
                max_steps: steps,
                pattern_file: pattern,
                builtin,
                padding,
                style,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Show { pattern, padding } => {
            show_command(pattern, padding)
        }
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn start_pattern(settings: &Settings) -> Result<Box<dyn Pattern>> {
    let padding = settings.pattern.padding;
    match &settings.pattern.builtin {
        Some(name) => {
            let builtin = find_builtin(name)
                .with_context(|| format!("Unknown built-in pattern: {}", name))?;
            Ok(Box::new(builtin.with_padding(padding)?))
        }
        None => {
            let file = &settings.pattern.file;
            let pattern = LifPattern::from_file(file, padding)
                .with_context(|| format!("Failed to load pattern from {}", file.display()))?;
            Ok(Box::new(pattern))
        }
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);

    settings.validate()
        .context("Configuration validation failed")?;

    let pattern = start_pattern(&settings)?;
    let initial = pattern.start_generation();

    let mut simulation = Simulation::builder()
        .with_interval(settings.simulation.interval_ms)?
        .with_max_steps(settings.simulation.max_steps)?
        .with_pattern(pattern.as_ref())
        .build()
        .context("Failed to build simulation")?;

    let display: Arc<dyn Display> = Arc::new(ConsoleDisplay::stdout(
        settings.display.style,
        settings.display.clear_screen,
    ));
    simulation.attach(display);

    if settings.display.style != RenderStyle::Json {
        println!("{}", ColorOutput::info(&format!(
            "Starting {} for {} generations", GridFormatter::format_statistics(&initial),
            settings.simulation.max_steps
        )));
    }

    let start_time = Instant::now();
    simulation.run();
    let total_time = start_time.elapsed();

    if settings.display.style != RenderStyle::Json {
        let last = simulation.current_generation();
        println!("{}", ColorOutput::success(&format!(
            "Completed {} generations in {:.3}s: {} → {} living cells",
            simulation.steps_taken(),
            total_time.as_secs_f64(),
            initial.living_count(),
            last.living_count()
        )));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.pattern.file = patterns_dir.join("glider.lif");
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    for builtin in BUILTIN_PATTERNS {
        let path = patterns_dir.join(format!("{}.lif", builtin.name));
        if path.exists() && !force {
            println!("Skipped: {} (already exists)", path.display());
            continue;
        }
        let grid = builtin.with_padding(0)?.start_generation();
        save_lif_to_file(&grid, &path)?;
        println!("Created: {}", path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Add your own .lif patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}

fn show_command(pattern_path: PathBuf, padding: i32) -> Result<()> {
    let pattern = LifPattern::from_file(&pattern_path, padding)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;
    let grid = pattern.start_generation();

    println!("{}", ColorOutput::info(&format!("Pattern {}:", pattern.source().display())));
    println!("{}", GridFormatter::format_grid_with_coords(&grid));
    println!("{}", GridFormatter::format_statistics(&grid));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_of_life_sim::LifeError;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_sim",
            "run",
            "--config", "test.yaml",
            "--steps", "5",
            "--padding", "-1",
            "--style", "json",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.lif").exists());

        let settings = Settings::from_file(&temp_dir.path().join("config/default.yaml")).unwrap();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_run_with_builtin_pattern() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            interval_ms: Some(1),
            max_steps: Some(2),
            builtin: Some("blinker".into()),
            style: Some(RenderStyle::Json),
            ..Default::default()
        };

        let result = run_command(temp_dir.path().join("missing.yaml"), overrides);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_rejects_negative_padding() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            builtin: Some("block".into()),
            padding: Some(-1),
            ..Default::default()
        };

        assert!(run_command(temp_dir.path().join("missing.yaml"), overrides).is_err());
    }

    #[test]
    fn test_run_missing_pattern_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            pattern_file: Some(temp_dir.path().join("absent.lif")),
            ..Default::default()
        };

        let err = run_command(temp_dir.path().join("missing.yaml"), overrides).unwrap_err();
        assert!(err.to_string().contains("Failed to load pattern"));
        let cause = err.downcast_ref::<LifeError>().unwrap();
        assert!(cause.is_io());
    }
}
