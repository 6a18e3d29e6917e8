//! Static provider/model registry.
//!
//! Maps an AI SDK provider package identifier to its display name, available
//! models (with capability tags), import symbol, and constructor-call
//! formatting. Lookup never fails: an unknown provider key degrades to a
//! heuristic format derived from the trailing path segment of the key.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

mod providers;

/// A capability tag on a model, used to filter model choices for node types
/// that need them (e.g. tool calling for streamText with tools).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Image,
    Object,
    Tool,
    ToolStreaming,
}

impl Capability {
    pub fn tag(&self) -> &'static str {
        match self {
            Capability::Image => "image",
            Capability::Object => "object",
            Capability::Tool => "tool",
            Capability::ToolStreaming => "tool-streaming",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single model offered by a provider.
#[derive(Debug, Clone, Copy)]
pub struct Model {
    pub id: &'static str,
    pub capabilities: &'static [Capability],
}

impl Model {
    /// True if this model carries every one of the required capability tags.
    pub fn supports(&self, required: &[Capability]) -> bool {
        required.iter().all(|cap| self.capabilities.contains(cap))
    }
}

/// A registry entry for one provider package.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    /// The npm package identifier, e.g. `@ai-sdk/openai`.
    pub key: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// The symbol the provider package exports, e.g. `openai`.
    pub import_name: &'static str,
    pub models: &'static [Model],
}

impl Provider {
    /// Formats the model constructor call, e.g. `openai('gpt-4o')`.
    pub fn format_call(&self, model_id: &str) -> String {
        format!("{}('{}')", self.import_name, model_id)
    }

    /// Formats the full import line for this provider package.
    pub fn import_statement(&self) -> String {
        format!("import {{ {} }} from \"{}\";", self.import_name, self.key)
    }

    /// Models carrying every required capability. An empty requirement list
    /// keeps everything.
    pub fn models_matching(&self, required: &[Capability]) -> Vec<&Model> {
        self.models.iter().filter(|m| m.supports(required)).collect()
    }
}

/// The complete import/constructor selection for a provider + model pair,
/// as stored on stream and generate nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSelection {
    pub provider: String,
    pub model: String,
    pub model_format: String,
    pub import_statement: String,
}

/// The provider lookup table. Declaration order is preserved so the first
/// entry doubles as the picker's default provider.
pub struct Registry {
    providers: &'static [Provider],
    index: AHashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        let index = providers::PROVIDERS
            .iter()
            .enumerate()
            .map(|(i, p)| (p.key, i))
            .collect();
        Self {
            providers: providers::PROVIDERS,
            index,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Provider> {
        self.index.get(key).map(|&i| &self.providers[i])
    }

    /// All providers, in declaration order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    /// The provider a fresh picker starts on.
    pub fn default_provider(&self) -> &Provider {
        &self.providers[0]
    }

    /// Builds the selection record for a provider + model pair. A provider key
    /// missing from the table is not an error: the import symbol and call
    /// expression are synthesized from the trailing path segment of the key.
    pub fn selection(&self, provider_key: &str, model_id: &str) -> ModelSelection {
        match self.get(provider_key) {
            Some(provider) => ModelSelection {
                provider: provider_key.to_string(),
                model: model_id.to_string(),
                model_format: provider.format_call(model_id),
                import_statement: provider.import_statement(),
            },
            None => {
                log::warn!(
                    "provider '{}' not in registry, falling back to heuristic formatting",
                    provider_key
                );
                let symbol = fallback_symbol(provider_key);
                ModelSelection {
                    provider: provider_key.to_string(),
                    model: model_id.to_string(),
                    model_format: format!("{}('{}')", symbol, model_id),
                    import_statement: format!(
                        "import {{ {} }} from \"{}\";",
                        symbol, provider_key
                    ),
                }
            }
        }
    }

    /// Mirrors the picker's model auto-correction: if the requested model is
    /// absent or does not satisfy the required capabilities, the first model
    /// that does is selected instead. Unknown providers skip filtering and
    /// fall through to heuristic formatting.
    pub fn resolve_selection(
        &self,
        provider_key: &str,
        model_id: &str,
        required: &[Capability],
    ) -> ModelSelection {
        let resolved = self.get(provider_key).map_or_else(
            || model_id.to_string(),
            |provider| {
                let available = provider.models_matching(required);
                if available.iter().any(|m| m.id == model_id) {
                    model_id.to_string()
                } else {
                    available
                        .first()
                        .map(|m| m.id.to_string())
                        .unwrap_or_else(|| model_id.to_string())
                }
            },
        );
        self.selection(provider_key, &resolved)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// The trailing path segment of a provider key, or `provider` when the key is
/// empty. `@ai-sdk/openai` yields `openai`; keys without a slash pass through.
fn fallback_symbol(key: &str) -> &str {
    match key.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => "provider",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_symbol_takes_trailing_segment() {
        assert_eq!(fallback_symbol("@ai-sdk/openai"), "openai");
        assert_eq!(fallback_symbol("chrome-ai"), "chrome-ai");
        assert_eq!(fallback_symbol(""), "provider");
    }

    #[test]
    fn registry_preserves_declaration_order() {
        let registry = Registry::new();
        assert_eq!(registry.default_provider().key, "@ai-sdk/openai");
        let keys: Vec<_> = registry.providers().map(|p| p.key).collect();
        assert_eq!(keys[1], "@ai-sdk/azure");
        assert_eq!(keys.len(), 19);
    }
}
