use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;
use tracing::debug;

use crate::codegen::{RendererOptions, TargetLanguage};

pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/SchemaStore/schemastore/refs/heads/master/src/schemas/json/github-workflow.json";
pub const DEFAULT_SCHEMA_NAME: &str = "Workflow";
pub const DEFAULT_OUTPUT_PATH: &str = "workspace/gh-workflow-rs/src/model.rs";

/// Everything a generator run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub source_url: String,
    pub schema_name: String,
    pub output_path: PathBuf,
    pub target: TargetLanguage,
    pub renderer: RendererOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            schema_name: DEFAULT_SCHEMA_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target: TargetLanguage::Rust,
            renderer: RendererOptions::default(),
        }
    }
}

/// Overrides read from a TOML config file. Renderer options are not part of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "source-url")]
    pub source_url: Option<String>,
    #[serde(rename = "schema-name")]
    pub schema_name: Option<String>,
    #[serde(rename = "output-path")]
    pub output_path: Option<PathBuf>,
}

impl FileConfig {
    /// Loads the given config file. Without a path nothing is read and no
    /// defaults are overridden.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        Self::load_from(config_path).await
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let config_str = read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let config = Self::parse(&config_str)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());

        Ok(config)
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(source_url) = self.source_url {
            config.source_url = source_url;
        }
        if let Some(schema_name) = self.schema_name {
            config.schema_name = schema_name;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        config
    }
}
