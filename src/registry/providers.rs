//! The built-in provider table: one entry per AI SDK provider package, in the
//! order the editor's picker lists them.

use super::{Capability, Model, Provider};
use Capability::{Image, Object, Tool, ToolStreaming};

const FULL: &[Capability] = &[Image, Object, Tool, ToolStreaming];

pub(super) const PROVIDERS: &[Provider] = &[
    Provider {
        key: "@ai-sdk/openai",
        name: "OpenAI",
        import_name: "openai",
        models: &[
            Model { id: "gpt-4o", capabilities: FULL },
            Model { id: "gpt-4o-mini", capabilities: FULL },
            Model { id: "gpt-4-turbo", capabilities: FULL },
            Model { id: "gpt-4", capabilities: FULL },
            Model { id: "o3-mini", capabilities: &[Tool, ToolStreaming] },
            Model { id: "o1", capabilities: &[Image] },
            Model { id: "o1-mini", capabilities: &[Image] },
            Model { id: "o1-preview", capabilities: &[Image] },
        ],
    },
    Provider {
        key: "@ai-sdk/azure",
        name: "Azure OpenAI",
        import_name: "azureOpenAI",
        models: &[
            Model { id: "gpt-4o", capabilities: FULL },
            Model { id: "gpt-4-turbo", capabilities: FULL },
            Model { id: "gpt-4", capabilities: FULL },
        ],
    },
    Provider {
        key: "@ai-sdk/anthropic",
        name: "Anthropic",
        import_name: "anthropic",
        models: &[
            Model { id: "claude-3-7-sonnet-20250219", capabilities: FULL },
            Model { id: "claude-3-5-sonnet-20241022", capabilities: FULL },
            Model { id: "claude-3-5-sonnet-20240620", capabilities: FULL },
            Model { id: "claude-3-5-haiku-20241022", capabilities: FULL },
        ],
    },
    Provider {
        key: "@ai-sdk/amazon-bedrock",
        name: "Amazon Bedrock",
        import_name: "amazonBedrock",
        models: &[
            Model { id: "anthropic.claude-3-haiku-20240307", capabilities: &[Image] },
            Model { id: "anthropic.claude-3-sonnet-20240229", capabilities: &[Image] },
            Model { id: "anthropic.claude-3-opus-20240229", capabilities: &[Image] },
            Model { id: "meta.llama3-70b-instruct", capabilities: &[] },
            Model { id: "meta.llama3-8b-instruct", capabilities: &[] },
        ],
    },
    Provider {
        key: "@ai-sdk/google",
        name: "Google Generative AI",
        import_name: "googleGenerativeAI",
        models: &[
            Model { id: "gemini-2.0-flash-exp", capabilities: &[Image, Tool] },
            Model { id: "gemini-1.5-flash", capabilities: &[Image, Tool] },
            Model { id: "gemini-1.5-pro", capabilities: &[Image, Tool] },
        ],
    },
    Provider {
        key: "@ai-sdk/google-vertex",
        name: "Google Vertex",
        import_name: "googleVertex",
        models: &[
            Model { id: "gemini-2.0-flash-exp", capabilities: &[Image, Tool] },
            Model { id: "gemini-1.5-flash", capabilities: &[Image, Tool] },
            Model { id: "gemini-1.5-pro", capabilities: &[Image, Tool] },
        ],
    },
    Provider {
        key: "@ai-sdk/mistral",
        name: "Mistral",
        import_name: "mistral",
        models: &[
            Model { id: "pixtral-large-latest", capabilities: &[Image, Tool] },
            Model { id: "mistral-large-latest", capabilities: &[Tool] },
            Model { id: "mistral-small-latest", capabilities: &[Tool] },
            Model { id: "pixtral-12b-2409", capabilities: &[Image] },
        ],
    },
    Provider {
        key: "@ai-sdk/xai",
        name: "xAI Grok",
        import_name: "xai",
        models: &[
            Model { id: "grok-2-1212", capabilities: &[Tool] },
            Model { id: "grok-2-vision-1212", capabilities: &[Image, Tool] },
            Model { id: "grok-beta", capabilities: &[] },
            Model { id: "grok-vision-beta", capabilities: &[Image] },
        ],
    },
    Provider {
        key: "@ai-sdk/togetherai",
        name: "Together.ai",
        import_name: "togetherAI",
        models: &[
            Model { id: "togethercomputer/llama-3-70b-instruct", capabilities: &[] },
            Model { id: "togethercomputer/llama-3-8b-instruct", capabilities: &[] },
            Model { id: "mistralai/Mixtral-8x7B-Instruct-v0.1", capabilities: &[] },
        ],
    },
    Provider {
        key: "@ai-sdk/cohere",
        name: "Cohere",
        import_name: "cohere",
        models: &[
            Model { id: "command", capabilities: &[] },
            Model { id: "command-r", capabilities: &[] },
            Model { id: "command-r-plus", capabilities: &[] },
        ],
    },
    Provider {
        key: "@ai-sdk/fireworks",
        name: "Fireworks",
        import_name: "fireworks",
        models: &[
            Model { id: "llama-v3-70b-instruct", capabilities: &[] },
            Model { id: "llama-v3-8b-instruct", capabilities: &[] },
        ],
    },
    Provider {
        key: "@ai-sdk/deepinfra",
        name: "DeepInfra",
        import_name: "deepInfra",
        models: &[
            Model { id: "meta-llama/Llama-3-70b-chat-hf", capabilities: &[] },
            Model { id: "meta-llama/Llama-3-8b-chat-hf", capabilities: &[] },
        ],
    },
    Provider {
        key: "@ai-sdk/deepseek",
        name: "DeepSeek",
        import_name: "deepSeek",
        models: &[
            Model { id: "deepseek-chat", capabilities: &[Tool] },
            Model { id: "deepseek-reasoner", capabilities: &[Tool] },
        ],
    },
    Provider {
        key: "@ai-sdk/cerebras",
        name: "Cerebras",
        import_name: "cerebras",
        models: &[
            Model { id: "llama3.1-8b", capabilities: &[Tool] },
            Model { id: "llama3.1-70b", capabilities: &[Tool] },
            Model { id: "llama3.3-70b", capabilities: &[Tool] },
        ],
    },
    Provider {
        key: "@ai-sdk/groq",
        name: "Groq",
        import_name: "groq",
        models: &[
            Model { id: "llama-3.3-70b-versatile", capabilities: &[Image] },
            Model { id: "llama-3.1-8b-instant", capabilities: &[Image] },
            Model { id: "mixtral-8x7b-32768", capabilities: &[] },
            Model { id: "gemma2-9b-it", capabilities: &[] },
        ],
    },
    Provider {
        key: "@ai-sdk/perplexity",
        name: "Perplexity",
        import_name: "perplexity",
        models: &[
            Model { id: "sonar-small-online", capabilities: &[] },
            Model { id: "sonar-medium-online", capabilities: &[] },
        ],
    },
    Provider {
        key: "ollama-ai-provider",
        name: "Ollama",
        import_name: "ollama",
        models: &[
            Model { id: "llama3", capabilities: &[] },
            Model { id: "mistral", capabilities: &[] },
        ],
    },
    Provider {
        key: "chrome-ai",
        name: "ChromeAI",
        import_name: "chromeAI",
        models: &[Model { id: "gemini-pro", capabilities: &[] }],
    },
    Provider {
        key: "@openrouter/ai-sdk-provider",
        name: "OpenRouter",
        import_name: "openRouter",
        models: &[
            Model { id: "anthropic/claude-3-opus", capabilities: &[Image] },
            Model { id: "anthropic/claude-3-sonnet", capabilities: &[Image] },
            Model { id: "meta/llama-3-70b-instruct", capabilities: &[] },
        ],
    },
];
