pub mod generate;

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "generate-model")]
#[command(about = "Generate the GitHub workflow model from its JSON schema", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file. Without it only the built-in defaults and flags apply
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// URL of the JSON schema to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// Logical name of the schema, used for the root type
    #[arg(long)]
    pub name: Option<String>,

    /// Path of the generated source file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Verify the output file is up to date instead of writing it
    #[arg(long)]
    pub check: bool,
}

pub async fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();

    generate::run_generate(cli).await
}
