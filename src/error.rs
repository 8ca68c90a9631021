use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no schema sources were provided")]
    NoSources,

    #[error("schema name is empty")]
    EmptyName,

    #[error("schema `{name}` is not valid JSON")]
    InvalidJson {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema `{name}` is not a JSON object")]
    NotAnObject { name: String },

    #[error("schema `{name}` is not a readable JSON schema")]
    InvalidSchema {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to generate types for `{name}`")]
    Engine {
        name: String,
        #[source]
        source: typify::Error,
    },

    #[error("generated code is not valid Rust")]
    Syntax(#[from] syn::Error),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is out of date", path.display())]
    Stale { path: PathBuf },
}

/// Failure of a single pipeline run, tagged with the step that failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed")]
    Fetch(#[from] FetchError),

    #[error("generation failed")]
    Generate(#[from] GenerateError),

    #[error("write failed")]
    Write(#[from] WriteError),
}
