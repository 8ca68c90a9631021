use tracing::{info, warn};

use crate::{
    codegen::{CodegenEngine, GeneratedSource, InputData, SchemaSource, TypifyEngine},
    config::GeneratorConfig,
    error::{GenerateError, PipelineError},
    fetch::{HttpSchemaFetcher, SchemaFetcher},
    utils::fs::{ensure_unchanged, write_if_changed},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Runs fetch, generate and write once per call.
///
/// The output file is only touched after generation succeeded.
pub struct Generator<F = HttpSchemaFetcher, E = TypifyEngine> {
    config: GeneratorConfig,
    fetcher: F,
    engine: E,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with(config, HttpSchemaFetcher::new(), TypifyEngine::default())
    }
}

impl<F, E> Generator<F, E>
where
    F: SchemaFetcher,
    E: CodegenEngine,
{
    pub fn with(config: GeneratorConfig, fetcher: F, engine: E) -> Self {
        Self {
            config,
            fetcher,
            engine,
        }
    }

    pub fn generate(&self, schema: String) -> Result<GeneratedSource, GenerateError> {
        let input = InputData::new().add_source(SchemaSource::new(
            self.config.schema_name.clone(),
            schema,
        ));

        let generated = self
            .engine
            .generate(&input, self.config.target, &self.config.renderer)?;
        if generated.is_empty() {
            warn!("generated source for {} is empty", self.config.schema_name);
        }

        Ok(generated)
    }

    async fn produce(&self) -> Result<String, PipelineError> {
        info!("fetching schema from {}", self.config.source_url);
        let schema = self.fetcher.fetch(&self.config.source_url).await?;
        if schema.trim().is_empty() {
            warn!("schema fetched from {} is empty", self.config.source_url);
        }

        info!("generating code for {}", self.config.schema_name);
        let generated = self.generate(schema)?;

        Ok(generated.text())
    }

    pub async fn run(&self) -> Result<WriteOutcome, PipelineError> {
        let code = self.produce().await?;

        let outcome = write_if_changed(&self.config.output_path, code).await?;
        match outcome {
            WriteOutcome::Written => {
                info!("wrote {}", self.config.output_path.display())
            }
            WriteOutcome::Unchanged => {
                info!("{} is already up to date", self.config.output_path.display())
            }
        }

        Ok(outcome)
    }

    /// Like [`Generator::run`], but only verifies the output file is current.
    pub async fn check(&self) -> Result<(), PipelineError> {
        let code = self.produce().await?;

        ensure_unchanged(&self.config.output_path, code).await?;
        info!("{} is up to date", self.config.output_path.display());

        Ok(())
    }
}
