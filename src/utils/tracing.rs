use std::str::FromStr;

use anyhow::anyhow;
use tracing::Level;
use tracing_subscriber::fmt::Subscriber;

fn log_level(value: Result<String, std::env::VarError>) -> Level {
    value
        .map_err(|e| anyhow!("LOG_LEVEL environment variable is not set: {}", e))
        .and_then(|l| Level::from_str(&l).map_err(|e| anyhow!("Invalid log level: {}", e)))
        .unwrap_or(Level::INFO)
}

pub fn init_tracing() {
    let log_level = log_level(std::env::var("LOG_LEVEL"));

    let subscriber = Subscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
}
