use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use zigzag_core::CivilDate;

use crate::cli::ScenarioArgs;

/// Top-level tablet configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ZigzagConfig {
    /// Seed and horizon settings.
    #[serde(default)]
    pub scenario: ScenarioToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioToml {
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_initial_phase")]
    pub initial_phase: f64,
    #[serde(default = "default_num_months")]
    pub num_months: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ScenarioToml {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            initial_phase: default_initial_phase(),
            num_months: default_num_months(),
            threshold: default_threshold(),
        }
    }
}

// 2024-01-11 new moon, seeded close to the south node.
fn default_start_date() -> String {
    "2024-01-11".to_string()
}
fn default_initial_phase() -> f64 {
    0.48
}
// About two centuries of months.
fn default_num_months() -> usize {
    2400
}
fn default_threshold() -> f64 {
    zigzag_core::DEFAULT_THRESHOLD
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("babylonian_eclipse_data.json")
}

impl ZigzagConfig {
    /// Read and parse a TOML scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// A fully resolved run: defaults, then config file, then flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub start: CivilDate,
    pub initial_phase: f64,
    pub num_months: usize,
    pub threshold: f64,
    pub output: PathBuf,
}

impl Scenario {
    pub fn resolve(args: &ScenarioArgs, output: Option<&Path>) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ZigzagConfig::load(path)?,
            None => ZigzagConfig::default(),
        };
        Self::from_config(config, args, output)
    }

    fn from_config(config: ZigzagConfig, args: &ScenarioArgs, output: Option<&Path>) -> Result<Self> {
        let start_str = args.start.as_deref().unwrap_or(&config.scenario.start_date);
        let start: CivilDate = start_str
            .parse()
            .with_context(|| format!("invalid start date {start_str:?}"))?;
        Ok(Self {
            start,
            initial_phase: args.phase.unwrap_or(config.scenario.initial_phase),
            num_months: args.months.unwrap_or(config.scenario.num_months),
            threshold: args.threshold.unwrap_or(config.scenario.threshold),
            output: output.map_or(config.output.path, Path::to_path_buf),
        })
    }
}
