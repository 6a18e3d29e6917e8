//! Tests for the JSON-Schema to zod conversion and the parameter row sync.
use kumiki::editor::{Parameter, ParameterKind};
use kumiki::graph::DEFAULT_TOOL_SCHEMA;
use kumiki::prelude::*;

#[test]
fn test_default_tool_schema_conversion() {
    let zod = json_schema_to_zod(DEFAULT_TOOL_SCHEMA);
    assert_eq!(
        zod,
        "{\n    param1: z.string().describe('Description of parameter')\n  }"
    );
}

#[test]
fn test_entry_count_and_optional_count() {
    let schema = r#"{
        "type": "object",
        "properties": {
            "city": { "type": "string", "description": "The city" },
            "days": { "type": "number" },
            "metric": { "type": "boolean" }
        },
        "required": ["city", "days"]
    }"#;
    let zod = json_schema_to_zod(schema);

    assert_eq!(zod.matches(": z.").count(), 3);
    assert_eq!(zod.matches(".optional()").count(), 1);
    assert!(zod.contains("city: z.string().describe('The city')"));
    assert!(zod.contains("days: z.number()"));
    assert!(zod.contains("metric: z.boolean().optional()"));
}

#[test]
fn test_all_primitive_type_mappings() {
    let schema = r#"{
        "type": "object",
        "properties": {
            "s": { "type": "string" },
            "n": { "type": "number" },
            "b": { "type": "boolean" },
            "a": { "type": "array" },
            "o": { "type": "object" },
            "x": { "type": "something-else" },
            "u": {}
        }
    }"#;
    let zod = json_schema_to_zod(schema);

    assert!(zod.contains("s: z.string()"));
    assert!(zod.contains("n: z.number()"));
    assert!(zod.contains("b: z.boolean()"));
    assert!(zod.contains("a: z.array(z.any())"));
    assert!(zod.contains("o: z.object({})"));
    assert!(zod.contains("x: z.any()"));
    assert!(zod.contains("u: z.any()"));
    // Without a `required` array nothing is marked optional.
    assert!(!zod.contains(".optional()"));
}

#[test]
fn test_empty_required_array_marks_everything_optional() {
    let schema = r#"{
        "type": "object",
        "properties": {
            "a": { "type": "string" },
            "b": { "type": "number" }
        },
        "required": []
    }"#;
    let zod = json_schema_to_zod(schema);
    assert_eq!(zod.matches(".optional()").count(), 2);
}

#[test]
fn test_unparseable_schema_degrades_to_empty_object() {
    assert_eq!(json_schema_to_zod("{not json"), "{}");
    assert_eq!(json_schema_to_zod(""), "{}");
}

#[test]
fn test_properties_preserve_declaration_order() {
    let schema = r#"{
        "type": "object",
        "properties": {
            "zebra": { "type": "string" },
            "apple": { "type": "string" }
        }
    }"#;
    let zod = json_schema_to_zod(schema);
    assert!(zod.find("zebra").unwrap() < zod.find("apple").unwrap());
}

#[test]
fn test_parameter_rows_round_trip_through_schema() {
    let rows = vec![
        Parameter {
            name: "city".to_string(),
            kind: ParameterKind::String,
            description: "The city to look up".to_string(),
            required: true,
        },
        Parameter {
            name: "days".to_string(),
            kind: ParameterKind::Number,
            description: String::new(),
            required: false,
        },
        Parameter {
            name: "tags".to_string(),
            kind: ParameterKind::Array,
            description: "Filter tags".to_string(),
            required: false,
        },
    ];

    let schema = Parameter::to_schema(&rows);
    let mut reparsed = Parameter::from_schema(&schema);
    let mut expected = rows.clone();

    // Order-insensitive comparison of the {name, type, description, required} tuples.
    reparsed.sort_by(|a, b| a.name.cmp(&b.name));
    expected.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(reparsed, expected);
}

#[test]
fn test_schema_omits_required_array_when_no_row_is_required() {
    let rows = vec![Parameter {
        name: "note".to_string(),
        kind: ParameterKind::String,
        description: String::new(),
        required: false,
    }];
    let schema = Parameter::to_schema(&rows);
    assert!(!schema.contains("required"));

    let reparsed = Parameter::from_schema(&schema);
    assert!(!reparsed[0].required);
}

#[test]
fn test_generated_schema_feeds_back_into_zod_conversion() {
    let rows = vec![Parameter {
        name: "query".to_string(),
        kind: ParameterKind::String,
        description: "Search query".to_string(),
        required: true,
    }];
    let zod = json_schema_to_zod(&Parameter::to_schema(&rows));
    assert_eq!(zod, "{\n    query: z.string().describe('Search query')\n  }");
}
