pub mod cmd;

use std::process::ExitCode;

use gh_workflow_codegen::utils::tracing::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // a bad config is logged, the exit status stays at its default
    match cmd::run_cli().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::SUCCESS
        }
    }
}
