pub mod codegen;
pub mod config;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod utils;

pub use config::GeneratorConfig;
pub use driver::{Generator, WriteOutcome};
pub use error::PipelineError;
