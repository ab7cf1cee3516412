//! Configuration settings for the simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub initial_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub source: InitialState,
}

/// Where the starting grid comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialState {
    /// A pattern file: '1' marks a live cell, anything else is dead
    Pattern { file: PathBuf },
    /// rows * cols integers typed on the control stream
    DirectInput,
    /// Interactive start menu listing the bundled patterns
    Menu,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_char: char,
    pub dead_char: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // 25x80 terminal box minus a one-cell border on each side
            simulation: SimulationConfig {
                rows: 23,
                cols: 78,
                initial_delay_ms: 30,
            },
            input: InputConfig {
                source: InitialState::Menu,
            },
            display: DisplayConfig {
                alive_char: '0',
                dead_char: ' ',
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
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
        if self.simulation.rows == 0 {
            anyhow::bail!("Grid rows must be positive");
        }
        if self.simulation.cols == 0 {
            anyhow::bail!("Grid cols must be positive");
        }
        if !(10..=500).contains(&self.simulation.initial_delay_ms) {
            anyhow::bail!(
                "Initial delay must be between 10 and 500 ms, got {}",
                self.simulation.initial_delay_ms
            );
        }
        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.initial_delay_ms = delay_ms;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.input.source = InitialState::Pattern {
                file: pattern.clone(),
            };
        }
        if cli_overrides.direct_input {
            self.input.source = InitialState::DirectInput;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub delay_ms: Option<u64>,
    pub pattern: Option<PathBuf>,
    pub direct_input: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.rows, 23);
        assert_eq!(settings.simulation.cols, 78);
        assert_eq!(settings.simulation.initial_delay_ms, 30);
        assert_eq!(settings.input.source, InitialState::Menu);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.simulation.rows = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.initial_delay_ms = 5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.initial_delay_ms = 1000;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.input.source = InitialState::Pattern {
            file: PathBuf::from("patterns/gun.txt"),
        };
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.rows, settings.simulation.rows);
        assert_eq!(loaded.input.source, settings.input.source);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            rows: Some(10),
            delay_ms: Some(60),
            pattern: Some(PathBuf::from("custom.txt")),
            ..Default::default()
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.rows, 10);
        assert_eq!(settings.simulation.cols, 78);
        assert_eq!(settings.simulation.initial_delay_ms, 60);
        assert_eq!(
            settings.input.source,
            InitialState::Pattern {
                file: PathBuf::from("custom.txt")
            }
        );
    }

    #[test]
    fn test_direct_input_override_wins() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            direct_input: true,
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);
        assert_eq!(settings.input.source, InitialState::DirectInput);
    }
}
