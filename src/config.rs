use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use caeli_index::{DistributionFamily, IndexConfig};

/// Top-level caeli configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CaeliConfig {
    /// Index computation settings.
    #[serde(default)]
    pub index: IndexToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

/// `[index]` section of the TOML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexToml {
    /// Accumulation scales to compute.
    #[serde(default = "default_scales")]
    pub scales: Vec<usize>,

    /// Minimum calendar-group sample size for fitting.
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: usize,

    /// Epsilon clamping probabilities away from 0 and 1.
    #[serde(default = "default_clamp_epsilon")]
    pub clamp_epsilon: f64,

    /// Seasonal cycle length (number of distinct period labels).
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u8,
}

/// `[io]` section of the TOML file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

fn default_scales() -> Vec<usize> {
    vec![1, 3, 6, 12]
}

fn default_min_sample_size() -> usize {
    4
}

fn default_clamp_epsilon() -> f64 {
    1e-6
}

fn default_cycle_length() -> u8 {
    12
}

impl Default for IndexToml {
    fn default() -> Self {
        Self {
            scales: default_scales(),
            min_sample_size: default_min_sample_size(),
            clamp_epsilon: default_clamp_epsilon(),
            cycle_length: default_cycle_length(),
        }
    }
}

impl CaeliConfig {
    /// Load the configuration file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// Build an engine configuration for one scale from the TOML settings.
pub fn build_index_config(
    toml: &IndexToml,
    scale: usize,
    family: DistributionFamily,
) -> IndexConfig {
    IndexConfig::new(scale)
        .with_distribution(family)
        .with_min_sample_size(toml.min_sample_size)
        .with_clamp_epsilon(toml.clamp_epsilon)
        .with_cycle_length(toml.cycle_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_absent() {
        let cfg: CaeliConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.index.scales, vec![1, 3, 6, 12]);
        assert_eq!(cfg.index.min_sample_size, 4);
        assert_eq!(cfg.index.cycle_length, 12);
        assert!(cfg.io.input.is_none());
    }

    #[test]
    fn parses_full_config() {
        let cfg: CaeliConfig = toml::from_str(
            r#"
            [index]
            scales = [3, 12]
            min_sample_size = 6
            clamp_epsilon = 1e-5
            cycle_length = 4

            [io]
            input = "obs.csv"
            output = "spi.csv"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.index.scales, vec![3, 12]);
        assert_eq!(cfg.index.min_sample_size, 6);
        assert_eq!(cfg.index.cycle_length, 4);
        assert_eq!(cfg.io.input.as_deref(), Some(Path::new("obs.csv")));
    }

    #[test]
    fn cycle_length_reaches_index_config() {
        let cfg: CaeliConfig = toml::from_str("[index]\ncycle_length = 4\n").unwrap();
        let index_config =
            build_index_config(&cfg.index, 3, DistributionFamily::GammaZeroInflated);
        assert_eq!(index_config.cycle_length(), 4);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<CaeliConfig, _> = toml::from_str("[index]\nscale = 3\n");
        assert!(result.is_err());
    }
}
