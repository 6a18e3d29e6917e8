//! JSON-Schema to zod source fragment conversion.

use itertools::Itertools;
use serde_json::Value;

/// Converts a JSON-Schema-shaped string into the source of a zod object
/// literal, e.g. `{\n    city: z.string().describe('...'),\n    count: z.number().optional()\n  }`.
///
/// Per declared property the schema primitive types map to their zod
/// validator; anything unrecognized becomes `z.any()`. A `description` on a
/// string property is preserved as a chained `.describe()`. When the schema
/// carries a `required` array, properties absent from it are chained
/// `.optional()`; without the array nothing is marked optional.
///
/// Parse failure never surfaces to the caller: the conversion degrades to an
/// empty object literal and logs the diagnostic.
pub fn json_schema_to_zod(json_schema: &str) -> String {
    let schema: Value = match serde_json::from_str(json_schema) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("error parsing JSON schema: {}", e);
            return "{}".to_string();
        }
    };

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return "{ }".to_string();
    };

    let required = schema.get("required").and_then(Value::as_array);

    let entries = properties
        .iter()
        .map(|(key, prop)| {
            let mut entry = format!("\n    {}: z.{}", key, validator_for(prop));

            if let Some(required) = required {
                let is_required = required.iter().any(|r| r.as_str() == Some(key));
                if !is_required {
                    entry.push_str(".optional()");
                }
            }
            entry
        })
        .join(",");

    format!("{{{}\n  }}", entries)
}

/// The zod validator call for one property, without the leading `z.`.
fn validator_for(prop: &Value) -> String {
    match prop.get("type").and_then(Value::as_str) {
        Some("string") => {
            let mut call = "string()".to_string();
            if let Some(description) = prop.get("description").and_then(Value::as_str) {
                if !description.is_empty() {
                    call.push_str(&format!(".describe('{}')", description));
                }
            }
            call
        }
        Some("number") => "number()".to_string(),
        Some("boolean") => "boolean()".to_string(),
        Some("array") => "array(z.any())".to_string(),
        Some("object") => "object({})".to_string(),
        _ => "any()".to_string(),
    }
}
