use std::process::ExitCode;

use anyhow::Result;
use gh_workflow_codegen::{
    Generator, GeneratorConfig, codegen::CodegenEngine, config::FileConfig, fetch::SchemaFetcher,
};
use tracing::{debug, error};

use super::Cli;

pub async fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let file = FileConfig::load(cli.config.as_deref()).await?;
    let mut config = file.apply(GeneratorConfig::default());

    if let Some(url) = &cli.url {
        config.source_url = url.clone();
    }
    if let Some(name) = &cli.name {
        config.schema_name = name.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }

    debug!("resolved config: {:?}", config);
    Ok(config)
}

/// A failed check exits non-zero. A failed run is logged and still exits 0.
pub async fn execute<F, E>(generator: &Generator<F, E>, check: bool) -> ExitCode
where
    F: SchemaFetcher,
    E: CodegenEngine,
{
    if check {
        return match generator.check().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{:#}", anyhow::Error::from(e));
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = generator.run().await {
        error!("{:#}", anyhow::Error::from(e));
    }
    ExitCode::SUCCESS
}

pub async fn run_generate(cli: Cli) -> Result<ExitCode> {
    let config = build_config(&cli).await?;
    let generator = Generator::new(config);

    Ok(execute(&generator, cli.check).await)
}
