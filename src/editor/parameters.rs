//! Structured row view of a tool node's JSON-Schema parameter string.
//!
//! The editor keeps a `Vec<Parameter>` in sync with the schema string both
//! ways: rows are parsed out of the string for display, and every row edit
//! regenerates the string. The round trip preserves each row's
//! {name, type, description, required} tuple.

use serde_json::{Map, Value, json};
use std::fmt;

/// The JSON-Schema primitive types a parameter row can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParameterKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ParameterKind::String => "string",
            ParameterKind::Number => "number",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Array => "array",
            ParameterKind::Object => "object",
        }
    }

    /// Unrecognized tags fall back to `string`, matching the editor's select
    /// element defaulting.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => ParameterKind::Number,
            "boolean" => ParameterKind::Boolean,
            "array" => ParameterKind::Array,
            "object" => ParameterKind::Object,
            _ => ParameterKind::String,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One editable parameter row of a tool node.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub description: String,
    pub required: bool,
}

impl Parameter {
    /// The single row a tool node starts with when its schema is empty or
    /// unparseable.
    pub fn default_row() -> Self {
        Self {
            name: "param1".to_string(),
            kind: ParameterKind::String,
            description: "Description of parameter".to_string(),
            required: true,
        }
    }

    /// The name given to a freshly added row: `param<N+1>`.
    pub fn next_name(existing: &[Parameter]) -> String {
        format!("param{}", existing.len() + 1)
    }

    /// Parses a JSON-Schema string into parameter rows, in declaration order.
    /// A schema without properties, or one that fails to parse, yields the
    /// default row so the editor always has something to show.
    pub fn from_schema(schema: &str) -> Vec<Parameter> {
        let parsed: Value = match serde_json::from_str(schema) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("tool parameter schema is not valid JSON: {}", e);
                return vec![Parameter::default_row()];
            }
        };

        let required: Vec<&str> = parsed
            .get("required")
            .and_then(Value::as_array)
            .map(|r| r.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut rows = Vec::new();
        if let Some(properties) = parsed.get("properties").and_then(Value::as_object) {
            for (name, prop) in properties {
                rows.push(Parameter {
                    name: name.clone(),
                    kind: prop
                        .get("type")
                        .and_then(Value::as_str)
                        .map(ParameterKind::from_tag)
                        .unwrap_or_default(),
                    description: prop
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    required: required.contains(&name.as_str()),
                });
            }
        }

        if rows.is_empty() {
            rows.push(Parameter::default_row());
        }
        rows
    }

    /// Serializes parameter rows back into a pretty-printed JSON-Schema
    /// string. The `required` array is only present when at least one row is
    /// marked required.
    pub fn to_schema(rows: &[Parameter]) -> String {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));

        let mut properties = Map::new();
        for row in rows {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(row.kind.tag()));
            if !row.description.is_empty() {
                prop.insert("description".to_string(), json!(row.description));
            }
            properties.insert(row.name.clone(), Value::Object(prop));
        }
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<&str> = rows
            .iter()
            .filter(|r| r.required)
            .map(|r| r.name.as_str())
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        // Map insertion order survives serialization, so the emitted schema
        // reads type, properties, required.
        serde_json::to_string_pretty(&Value::Object(schema))
            .unwrap_or_else(|_| "{}".to_string())
    }
}
