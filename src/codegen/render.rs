use std::collections::BTreeSet;

use quote::format_ident;
use syn::{
    Attribute, Expr, ExprLit, Field, File, Item, Lit, Meta, Path, Token, Type, TypePath,
    parse_quote, punctuated::Punctuated,
};

use super::options::{RendererOptions, Visibility};

const SKIP_NONE: &str = "::std::option::Option::is_none";

/// Applies renderer options to the root-level items of a generated file.
///
/// Nested modules are left alone: the engine's support code lives there and
/// relies on its own visibility.
pub fn apply(file: &mut File, options: &RendererOptions) {
    let derives = options.requested_derives();
    let vis = syn_visibility(options.visibility);

    for item in file.items.iter_mut() {
        match item {
            Item::Struct(item) => {
                apply_derives(&mut item.attrs, &derives);
                item.vis = vis.clone();
                for field in item.fields.iter_mut() {
                    if field.ident.is_some() {
                        field.vis = vis.clone();
                        apply_skip_none(field, options.skip_serializing_none);
                    }
                }
            }
            Item::Enum(item) => {
                apply_derives(&mut item.attrs, &derives);
                item.vis = vis.clone();
                for variant in item.variants.iter_mut() {
                    for field in variant.fields.iter_mut() {
                        if field.ident.is_some() {
                            apply_skip_none(field, options.skip_serializing_none);
                        }
                    }
                }
            }
            Item::Type(item) => item.vis = vis.clone(),
            _ => {}
        }
    }
}

/// Comment header placed before the code when leading comments are enabled.
pub fn leading_comments(root_types: &[String]) -> Vec<String> {
    let mut lines = vec![
        "// Example code that deserializes and serializes the model.".to_string(),
        "//".to_string(),
        "// fn main() {".to_string(),
        "//     let json = r#\"{}\"#;".to_string(),
    ];
    for root in root_types {
        lines.push(format!(
            "//     let model: {} = serde_json::from_str(json).unwrap();",
            root
        ));
    }
    lines.push("// }".to_string());
    lines.push(String::new());
    lines
}

fn syn_visibility(visibility: Visibility) -> syn::Visibility {
    match visibility {
        Visibility::Public => parse_quote!(pub),
        Visibility::Crate => parse_quote!(pub(crate)),
        Visibility::Private => syn::Visibility::Inherited,
    }
}

fn derive_name(path: &Path) -> String {
    path.segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default()
}

// Items without a derive attribute have hand-written impls and are skipped.
fn apply_derives(attrs: &mut Vec<Attribute>, requested: &[&'static str]) {
    let mut seen = BTreeSet::new();
    let mut first: Option<usize> = None;
    let mut merged: Vec<Path> = Vec::new();

    let mut idx = 0;
    attrs.retain(|attr| {
        let current = idx;
        idx += 1;

        if !attr.path().is_ident("derive") {
            return true;
        }
        let Ok(paths) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
        else {
            return true;
        };

        merged.extend(paths.into_iter().filter(|path| seen.insert(derive_name(path))));
        match first {
            Some(_) => false,
            None => {
                first = Some(current);
                true
            }
        }
    });

    let Some(first) = first else {
        return;
    };

    for name in requested {
        if seen.insert(name.to_string()) {
            merged.push(Path::from(format_ident!("{}", name)));
        }
    }

    // `first` still points at the kept derive, only later ones were removed
    attrs[first] = parse_quote!(#[derive(#(#merged),*)]);
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return false;
    };
    path.segments
        .last()
        .is_some_and(|segment| segment.ident == "Option")
}

fn is_skip_none(meta: &Meta) -> bool {
    let Meta::NameValue(name_value) = meta else {
        return false;
    };
    if !name_value.path.is_ident("skip_serializing_if") {
        return false;
    }
    matches!(
        &name_value.value,
        Expr::Lit(ExprLit { lit: Lit::Str(value), .. }) if value.value().ends_with("Option::is_none")
    )
}

fn apply_skip_none(field: &mut Field, enabled: bool) {
    if !is_option(&field.ty) {
        return;
    }

    let mut serde_metas: Vec<Meta> = Vec::new();
    let mut position = None;
    let mut attrs = Vec::with_capacity(field.attrs.len() + 1);

    for attr in field.attrs.drain(..) {
        if attr.path().is_ident("serde") {
            if let Ok(metas) =
                attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            {
                position.get_or_insert(attrs.len());
                serde_metas.extend(metas);
                continue;
            }
        }
        attrs.push(attr);
    }

    serde_metas.retain(|meta| !is_skip_none(meta));
    if enabled {
        serde_metas.push(parse_quote!(skip_serializing_if = #SKIP_NONE));
    }

    if !serde_metas.is_empty() {
        let serde_attr: Attribute = parse_quote!(#[serde(#(#serde_metas),*)]);
        attrs.insert(position.unwrap_or(attrs.len()), serde_attr);
    }
    field.attrs = attrs;
}
