//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationSettings,
    pub pattern: PatternSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub interval_ms: u64,
    pub max_steps: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSettings {
    pub file: PathBuf,
    pub padding: i32,
    /// Built-in pattern name, used instead of `file` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub style: RenderStyle,
    #[serde(default)]
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    Compact,
    Coordinates,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings {
                interval_ms: 200,
                max_steps: 50,
            },
            pattern: PatternSettings {
                file: PathBuf::from("patterns/glider.lif"),
                padding: 5,
                builtin: None,
            },
            display: DisplaySettings {
                style: RenderStyle::Compact,
                clear_screen: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.interval_ms == 0 {
            anyhow::bail!("Interval must be positive");
        }

        if self.simulation.max_steps == 0 {
            anyhow::bail!("Number of steps must be positive");
        }

        if self.pattern.padding < 0 {
            anyhow::bail!("Padding may not be negative");
        }

        // Missing pattern files are reported by the loader as I/O errors
        if let Some(name) = &self.pattern.builtin {
            if crate::game_of_life::find_builtin(name).is_none() {
                anyhow::bail!("Unknown built-in pattern: {}", name);
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.simulation.interval_ms = interval_ms;
        }
        if let Some(max_steps) = cli_overrides.max_steps {
            self.simulation.max_steps = max_steps;
        }
        if let Some(ref file) = cli_overrides.pattern_file {
            self.pattern.file = file.clone();
            self.pattern.builtin = None;
        }
        if let Some(ref builtin) = cli_overrides.builtin {
            self.pattern.builtin = Some(builtin.clone());
        }
        if let Some(padding) = cli_overrides.padding {
            self.pattern.padding = padding;
        }
        if let Some(style) = cli_overrides.style {
            self.display.style = style;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interval_ms: Option<u64>,
    pub max_steps: Option<usize>,
    pub pattern_file: Option<PathBuf>,
    pub builtin: Option<String>,
    pub padding: Option<i32>,
    pub style: Option<RenderStyle>,
}
