//! Tests for the provider/model registry.
use kumiki::prelude::*;

#[test]
fn test_known_provider_formatting() {
    let registry = Registry::new();
    let provider = registry.get("@ai-sdk/anthropic").expect("known provider");

    assert_eq!(provider.name, "Anthropic");
    assert_eq!(
        provider.format_call("claude-3-5-haiku-20241022"),
        "anthropic('claude-3-5-haiku-20241022')"
    );
    assert_eq!(
        provider.import_statement(),
        "import { anthropic } from \"@ai-sdk/anthropic\";"
    );
}

#[test]
fn test_import_symbols_differ_from_trailing_segment_where_needed() {
    let registry = Registry::new();
    assert_eq!(registry.get("@ai-sdk/azure").unwrap().import_name, "azureOpenAI");
    assert_eq!(
        registry.get("@ai-sdk/google").unwrap().import_name,
        "googleGenerativeAI"
    );
    assert_eq!(
        registry.get("@openrouter/ai-sdk-provider").unwrap().import_name,
        "openRouter"
    );
}

#[test]
fn test_unknown_provider_falls_back_heuristically() {
    let registry = Registry::new();
    let selection = registry.selection("@acme/llm-kit", "acme-large");

    assert_eq!(selection.provider, "@acme/llm-kit");
    assert_eq!(selection.model, "acme-large");
    assert_eq!(selection.model_format, "llm-kit('acme-large')");
    assert_eq!(
        selection.import_statement,
        "import { llm-kit } from \"@acme/llm-kit\";"
    );

    // Keys without a path separator pass through whole.
    let flat = registry.selection("chrome-ai-beta", "nano");
    assert_eq!(flat.model_format, "chrome-ai-beta('nano')");
}

#[test]
fn test_capability_filtering() {
    let registry = Registry::new();
    let openai = registry.get("@ai-sdk/openai").unwrap();

    let tool_capable = openai.models_matching(&[Capability::Tool, Capability::ToolStreaming]);
    let ids: Vec<&str> = tool_capable.iter().map(|m| m.id).collect();
    assert!(ids.contains(&"gpt-4o"));
    assert!(ids.contains(&"o3-mini"));
    assert!(!ids.contains(&"o1"));

    // An empty requirement keeps every model.
    assert_eq!(openai.models_matching(&[]).len(), openai.models.len());
}

#[test]
fn test_resolve_selection_snaps_to_first_capable_model() {
    let registry = Registry::new();

    // o1 has no tool capability, so the picker snaps to the first model that does.
    let selection = registry.resolve_selection("@ai-sdk/openai", "o1", &[Capability::Tool]);
    assert_eq!(selection.model, "gpt-4o");
    assert_eq!(selection.model_format, "openai('gpt-4o')");

    // A model that already satisfies the requirement is kept.
    let kept = registry.resolve_selection("@ai-sdk/openai", "o3-mini", &[Capability::Tool]);
    assert_eq!(kept.model, "o3-mini");

    // Unknown providers skip filtering entirely.
    let unknown = registry.resolve_selection("@acme/llm-kit", "acme-large", &[Capability::Tool]);
    assert_eq!(unknown.model, "acme-large");
}

#[test]
fn test_capability_tags() {
    assert_eq!(Capability::Image.tag(), "image");
    assert_eq!(Capability::ToolStreaming.tag(), "tool-streaming");
    assert_eq!(Capability::ToolStreaming.to_string(), "tool-streaming");
}
