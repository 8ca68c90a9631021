use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Crate,
    #[default]
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Crate => "crate",
            Visibility::Public => "public",
        }
    }
}

/// Stylistic and structural choices applied to the generated code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RendererOptions {
    #[serde(rename = "derive-clone")]
    pub derive_clone: bool,
    #[serde(rename = "derive-debug")]
    pub derive_debug: bool,
    #[serde(rename = "derive-partial-eq")]
    pub derive_partial_eq: bool,
    #[serde(rename = "skip-serializing-none")]
    pub skip_serializing_none: bool,
    #[serde(rename = "visibility")]
    pub visibility: Visibility,
    #[serde(rename = "leading-comments")]
    pub leading_comments: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            derive_clone: true,
            derive_debug: true,
            derive_partial_eq: true,
            skip_serializing_none: true,
            visibility: Visibility::Public,
            leading_comments: false,
        }
    }
}

impl RendererOptions {
    pub fn to_map(&self) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("derive-clone", Value::Bool(self.derive_clone)),
            ("derive-debug", Value::Bool(self.derive_debug)),
            ("derive-partial-eq", Value::Bool(self.derive_partial_eq)),
            ("skip-serializing-none", Value::Bool(self.skip_serializing_none)),
            ("visibility", Value::from(self.visibility.as_str())),
            ("leading-comments", Value::Bool(self.leading_comments)),
        ])
    }

    pub(crate) fn requested_derives(&self) -> Vec<&'static str> {
        [
            (self.derive_clone, "Clone"),
            (self.derive_debug, "Debug"),
            (self.derive_partial_eq, "PartialEq"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}
