pub mod engine;
pub mod options;
mod render;

use crate::error::GenerateError;

pub use engine::TypifyEngine;
pub use options::{RendererOptions, Visibility};

/// Raw text of a JSON schema, tagged with the logical name of its root type.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSource {
    name: String,
    schema: String,
}

impl SchemaSource {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputData {
    sources: Vec<SchemaSource>,
}

impl InputData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(mut self, source: SchemaSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(&self) -> &[SchemaSource] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetLanguage {
    #[default]
    Rust,
}

/// Ordered lines of generated source code.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSource {
    lines: Vec<String>,
}

impl GeneratedSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub trait CodegenEngine {
    fn generate(
        &self,
        input: &InputData,
        language: TargetLanguage,
        options: &RendererOptions,
    ) -> Result<GeneratedSource, GenerateError>;
}
