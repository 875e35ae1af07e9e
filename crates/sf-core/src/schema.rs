//! JSON Schema generation for the verdict and the policy file.
//!
//! The verdict is the output contract for downstream rule components; the
//! policy schema documents what a policy file may contain.

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::resolve::{ReasonValue, Verdict};
pub use sf_config::Policy;

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Verdict", "OS identity determination for one snapshot"),
        ("ReasonValue", "Diagnostic value: text or list of identifiers"),
        ("Policy", "Resolver policy file"),
    ]
}

/// Generate JSON Schema for a type by name.
///
/// Returns `None` if the type is unknown.
pub fn generate_schema(type_name: &str) -> Option<Value> {
    let schema = match type_name {
        "Verdict" => schema_for!(Verdict),
        "ReasonValue" => schema_for!(ReasonValue),
        "Policy" => schema_for!(Policy),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}

/// Schema of [`Verdict`].
pub fn verdict_schema() -> Value {
    generate_schema("Verdict").unwrap_or(Value::Null)
}

/// Schema of [`Policy`].
pub fn policy_schema() -> Value {
    generate_schema("Policy").unwrap_or(Value::Null)
}

/// Generate all schemas as a map from type name to schema.
pub fn generate_all_schemas() -> BTreeMap<String, Value> {
    available_schemas()
        .into_iter()
        .filter_map(|(name, _desc)| generate_schema(name).map(|s| (name.to_string(), s)))
        .collect()
}

/// Schema output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

/// Format a schema value for output.
pub fn format_schema(schema: &Value, format: SchemaFormat) -> String {
    let rendered = match format {
        SchemaFormat::Json => serde_json::to_string_pretty(schema),
        SchemaFormat::JsonCompact => serde_json::to_string(schema),
    };
    rendered.unwrap_or_default()
}
