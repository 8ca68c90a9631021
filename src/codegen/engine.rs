use schemars::schema::RootSchema;
use serde_json::Value;
use tracing::debug;
use typify::{TypeSpace, TypeSpaceSettings};

use super::{
    CodegenEngine, GeneratedSource, InputData, RendererOptions, SchemaSource, TargetLanguage,
    render,
};
use crate::error::GenerateError;

/// Generates Rust types from JSON schemas with `typify`.
///
/// All sources of one input bundle share a single type space, so definitions
/// with the same name are only emitted once.
#[derive(Clone, Default)]
pub struct TypifyEngine {
    settings: TypeSpaceSettings,
}

impl CodegenEngine for TypifyEngine {
    fn generate(
        &self,
        input: &InputData,
        language: TargetLanguage,
        options: &RendererOptions,
    ) -> Result<GeneratedSource, GenerateError> {
        match language {
            TargetLanguage::Rust => {}
        }

        if input.is_empty() {
            return Err(GenerateError::NoSources);
        }

        let mut type_space = TypeSpace::new(&self.settings);
        let mut root_types = Vec::new();

        for source in input.sources() {
            let schema = root_schema(source)?;
            let root = type_space
                .add_root_schema(schema)
                .map_err(|err| GenerateError::Engine {
                    name: source.name().to_string(),
                    source: err,
                })?;

            if let Some(id) = root {
                if let Ok(ty) = type_space.get_type(&id) {
                    root_types.push(ty.name());
                }
            }
            debug!("added schema {} to type space", source.name());
        }

        let mut file = syn::parse2::<syn::File>(type_space.to_stream())?;
        render::apply(&mut file, options);

        let mut lines = Vec::new();
        if options.leading_comments {
            lines.extend(render::leading_comments(&root_types));
        }
        lines.extend(prettyplease::unparse(&file).lines().map(str::to_owned));

        Ok(GeneratedSource::new(lines))
    }
}

// The root type is named after the source, whatever title the document carries.
fn root_schema(source: &SchemaSource) -> Result<RootSchema, GenerateError> {
    if source.name().trim().is_empty() {
        return Err(GenerateError::EmptyName);
    }

    let value: Value =
        serde_json::from_str(source.schema()).map_err(|err| GenerateError::InvalidJson {
            name: source.name().to_string(),
            source: err,
        })?;

    let Value::Object(mut object) = value else {
        return Err(GenerateError::NotAnObject {
            name: source.name().to_string(),
        });
    };
    object.insert("title".to_string(), Value::from(source.name()));

    serde_json::from_value(Value::Object(object)).map_err(|err| GenerateError::InvalidSchema {
        name: source.name().to_string(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::{Fields, Item};

    const MINIMAL: &str = r#"{"type":"object","properties":{"name":{"type":"string"}}}"#;

    fn generate(
        input: InputData,
        options: &RendererOptions,
    ) -> Result<GeneratedSource, GenerateError> {
        TypifyEngine::default().generate(&input, TargetLanguage::Rust, options)
    }

    fn single(name: &str, schema: &str) -> InputData {
        InputData::new().add_source(SchemaSource::new(name, schema))
    }

    fn find_struct(file: &syn::File, name: &str) -> Option<syn::ItemStruct> {
        file.items.iter().find_map(|item| match item {
            Item::Struct(item) if item.ident == name => Some(item.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_minimal_schema_yields_named_struct() {
        let source = generate(single("Workflow", MINIMAL), &RendererOptions::default()).unwrap();
        assert!(!source.is_empty());

        let file = syn::parse_file(&source.text()).unwrap();
        let workflow = find_struct(&file, "Workflow").unwrap();
        let Fields::Named(fields) = &workflow.fields else {
            panic!("expected named fields");
        };

        let name = fields
            .named
            .iter()
            .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "name"))
            .unwrap();
        assert!(matches!(name.vis, syn::Visibility::Public(_)));
        assert!(name.ty.to_token_stream().to_string().contains("String"));
    }

    #[test]
    fn test_default_options_shape_output() {
        let source = generate(single("Workflow", MINIMAL), &RendererOptions::default()).unwrap();
        let text = source.text();

        assert!(text.contains("pub struct Workflow"));
        assert!(text.contains("PartialEq"));
        assert!(text.contains("skip_serializing_if = \"::std::option::Option::is_none\""));
        assert!(!source.lines()[0].starts_with("// Example"));
    }

    #[test]
    fn test_source_name_overrides_title() {
        let schema = r#"{"title":"Something Else","type":"object","properties":{"on":{"type":"string"}}}"#;
        let source = generate(single("Workflow", schema), &RendererOptions::default()).unwrap();

        let file = syn::parse_file(&source.text()).unwrap();
        assert!(find_struct(&file, "Workflow").is_some());
        assert!(find_struct(&file, "SomethingElse").is_none());
    }

    #[test]
    fn test_leading_comments_prepended() {
        let options = RendererOptions {
            leading_comments: true,
            ..RendererOptions::default()
        };
        let source = generate(single("Workflow", MINIMAL), &options).unwrap();

        assert!(source.lines()[0].starts_with("// Example"));
        assert!(source.text().contains("let model: Workflow"));
        syn::parse_file(&source.text()).unwrap();
    }

    #[test]
    fn test_multiple_sources_share_output() {
        let input = InputData::new()
            .add_source(SchemaSource::new("Workflow", MINIMAL))
            .add_source(SchemaSource::new(
                "Action",
                r#"{"type":"object","properties":{"author":{"type":"string"}}}"#,
            ));
        let source = generate(input, &RendererOptions::default()).unwrap();

        let file = syn::parse_file(&source.text()).unwrap();
        assert!(find_struct(&file, "Workflow").is_some());
        assert!(find_struct(&file, "Action").is_some());
    }

    #[test]
    fn test_definitions_are_generated() {
        let schema = r##"{
            "type": "object",
            "properties": { "jobs": { "$ref": "#/definitions/job" } },
            "definitions": {
                "job": {
                    "type": "object",
                    "properties": { "runs-on": { "type": "string" } },
                    "required": ["runs-on"]
                }
            }
        }"##;
        let source = generate(single("Workflow", schema), &RendererOptions::default()).unwrap();

        let file = syn::parse_file(&source.text()).unwrap();
        let job = find_struct(&file, "Job").unwrap();
        let printed = job.to_token_stream().to_string();
        assert!(printed.contains("runs_on"));
        assert!(printed.contains("runs-on"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate(single("Workflow", MINIMAL), &RendererOptions::default()).unwrap();
        let second = generate(single("Workflow", MINIMAL), &RendererOptions::default()).unwrap();
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = generate(InputData::new(), &RendererOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::NoSources));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = generate(single("Workflow", "404: Not Found"), &RendererOptions::default())
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidJson { ref name, .. } if name == "Workflow"));
    }

    #[test]
    fn test_blank_name_rejected() {
        for name in ["", "  "] {
            let err = generate(single(name, MINIMAL), &RendererOptions::default()).unwrap_err();
            assert!(matches!(err, GenerateError::EmptyName));
        }
    }

    #[test]
    fn test_non_object_rejected() {
        let err =
            generate(single("Workflow", "[1, 2, 3]"), &RendererOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::NotAnObject { .. }));
    }

    #[test]
    fn test_malformed_schema_rejected() {
        let err = generate(single("Workflow", r#"{"type": 42}"#), &RendererOptions::default())
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidSchema { .. }));
    }
}
