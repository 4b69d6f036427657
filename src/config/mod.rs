mod file_config;

pub use file_config::FileConfig;

use crate::recommend::{RecommenderSettings, SamplingPolicy, DEFAULT_NUM_RECOMMENDATIONS};
use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATASET_FILE: &str = "spotify_clustered.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Cards,
    Json,
}

/// CLI arguments that can be used for config resolution.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub dataset_path: Option<PathBuf>,
    pub num_recommendations: usize,
    pub sampling_policy: SamplingPolicy,
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            num_recommendations: DEFAULT_NUM_RECOMMENDATIONS,
            sampling_policy: SamplingPolicy::default(),
            seed: None,
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub num_recommendations: usize,
    pub sampling_policy: SamplingPolicy,
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE));

        if !dataset_path.is_file() {
            bail!("Dataset file does not exist: {:?}", dataset_path);
        }

        let num_recommendations = file
            .num_recommendations
            .unwrap_or(cli.num_recommendations);
        if num_recommendations == 0 {
            bail!("num_recommendations must be at least 1");
        }

        Ok(Self {
            dataset_path,
            num_recommendations,
            sampling_policy: file.sampling_policy.unwrap_or(cli.sampling_policy),
            seed: file.seed.or(cli.seed),
            output: file.output.unwrap_or(cli.output),
        })
    }

    pub fn recommender_settings(&self) -> RecommenderSettings {
        RecommenderSettings {
            num_recommendations: self.num_recommendations,
            sampling_policy: self.sampling_policy,
            seed: self.seed,
        }
    }
}
