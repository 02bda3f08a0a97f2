//! config.rs — Optional TOML configuration for the analysis binaries.
//!
//! Every field has a default matching the fixed filenames the simulator
//! writes, so running without a config file reproduces the stock behavior.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "InputsConfig::default_champion_path")]
    pub champion_path: String,
    #[serde(default = "InputsConfig::default_reference_path")]
    pub reference_path: String,
    #[serde(default = "InputsConfig::default_results_path")]
    pub results_path: String,
}

impl InputsConfig {
    fn default_champion_path() -> String {
        "champion_genome.json".to_string()
    }
    fn default_reference_path() -> String {
        "our_universe.json".to_string()
    }
    fn default_results_path() -> String {
        "harmonic_results.csv".to_string()
    }
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            champion_path: Self::default_champion_path(),
            reference_path: Self::default_reference_path(),
            results_path: Self::default_results_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_width")]
    pub width: u32,
    #[serde(default = "ChartConfig::default_height")]
    pub height: u32,
    #[serde(default = "ChartConfig::default_out_path")]
    pub out_path: String,
}

impl ChartConfig {
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        800
    }
    fn default_out_path() -> String {
        "fitness_por_armonico.png".to_string()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            out_path: Self::default_out_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl AnalysisConfig {
    /// Read the config at `path`, falling back to defaults when the file
    /// is absent or unreadable. A broken config never aborts a run.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            debug!(path, "config not found; using defaults");
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("Failed to read config {path}: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}
