use super::OutputFormat;
use crate::recommend::SamplingPolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub dataset_path: Option<String>,
    pub num_recommendations: Option<usize>,
    pub sampling_policy: Option<SamplingPolicy>,
    pub seed: Option<u64>,
    pub output: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
