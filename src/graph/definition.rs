use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete, canonical definition of an editor graph, ready for code generation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    /// Returns the first streamText node, if any. Additional streamText nodes
    /// are dead data: only the first one ever influences generated output.
    pub fn first_stream_text(&self) -> Option<&StreamTextData> {
        self.nodes.iter().find_map(|n| match &n.data {
            NodeData::StreamText(data) => Some(data),
            _ => None,
        })
    }

    /// Iterates over all tool nodes in list order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolData> {
        self.nodes.iter().filter_map(|n| match &n.data {
            NodeData::Tool(data) => Some(data),
            _ => None,
        })
    }

    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeDefinition> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }
}

/// Defines a single configurable node in the editor graph.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

/// Defines a visual connector between two nodes. Edges are decorative:
/// the generator never reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// A canvas-space coordinate. UI-only; carries no semantic weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The set of supported node types. Adding a type means adding a data record
/// and a generator branch; there is no plugin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    StreamText,
    Tool,
    GenerateText,
    GenerateObject,
    StreamObject,
}

impl NodeKind {
    /// The wire tag used in node ids and the palette drag payload.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::StreamText => "streamText",
            NodeKind::Tool => "tool",
            NodeKind::GenerateText => "generateText",
            NodeKind::GenerateObject => "generateObject",
            NodeKind::StreamObject => "streamObject",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "streamText" => Some(NodeKind::StreamText),
            "tool" => Some(NodeKind::Tool),
            "generateText" => Some(NodeKind::GenerateText),
            "generateObject" => Some(NodeKind::GenerateObject),
            "streamObject" => Some(NodeKind::StreamObject),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Type-specific node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    StreamText(StreamTextData),
    Tool(ToolData),
    GenerateText(GenerateTextData),
    GenerateObject(GenerateObjectData),
    StreamObject(StreamObjectData),
}

impl NodeData {
    /// Creates the type-specific default payload used when a node is dropped
    /// onto the canvas.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::StreamText => NodeData::StreamText(StreamTextData::default()),
            NodeKind::Tool => NodeData::Tool(ToolData::default()),
            NodeKind::GenerateText => NodeData::GenerateText(GenerateTextData::default()),
            NodeKind::GenerateObject => NodeData::GenerateObject(GenerateObjectData::default()),
            NodeKind::StreamObject => NodeData::StreamObject(StreamObjectData::default()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::StreamText(_) => NodeKind::StreamText,
            NodeData::Tool(_) => NodeKind::Tool,
            NodeData::GenerateText(_) => NodeKind::GenerateText,
            NodeData::GenerateObject(_) => NodeKind::GenerateObject,
            NodeData::StreamObject(_) => NodeKind::StreamObject,
        }
    }
}

/// The JSON-Schema string a freshly dropped tool node starts with.
pub const DEFAULT_TOOL_SCHEMA: &str = "{\n  \"type\": \"object\",\n  \"properties\": {\n    \"param1\": {\n      \"type\": \"string\",\n      \"description\": \"Description of parameter\"\n    }\n  },\n  \"required\": [\"param1\"]\n}";

const DEFAULT_OBJECT_SCHEMA: &str = "{ \"type\": \"object\", \"properties\": {} }";

fn default_provider() -> String {
    "@ai-sdk/openai".to_string()
}
fn default_model() -> String {
    "gpt-4o".to_string()
}
fn default_model_format() -> String {
    "openai('gpt-4o')".to_string()
}
fn default_import_statement() -> String {
    "import { openai } from \"@ai-sdk/openai\";".to_string()
}
fn default_system_prompt() -> String {
    "You are a helpful assistant.".to_string()
}
fn default_true() -> bool {
    true
}
fn default_max_steps() -> u32 {
    5
}
fn default_tool_name() -> String {
    "myTool".to_string()
}
fn default_tool_description() -> String {
    "Description of what this tool does".to_string()
}
fn default_tool_schema() -> String {
    DEFAULT_TOOL_SCHEMA.to_string()
}
fn default_object_schema() -> String {
    DEFAULT_OBJECT_SCHEMA.to_string()
}

/// Configuration for a text-streaming node. The serde defaults mirror the
/// defensive field initialization of the original editor forms, so partially
/// populated documents deserialize into a fully usable record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamTextData {
    pub provider: String,
    pub model: String,
    pub system_prompt: String,
    /// Whether the generated handler passes the request messages through.
    pub messages: bool,
    pub max_steps: u32,
    /// Model constructor snippet, e.g. `openai('gpt-4o')`.
    pub model_format: String,
    /// Full import line for the selected provider package.
    pub import_statement: String,
}

impl Default for StreamTextData {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            messages: default_true(),
            max_steps: default_max_steps(),
            model_format: default_model_format(),
            import_statement: default_import_statement(),
        }
    }
}

/// Configuration for a tool node. `parameters` holds a JSON-Schema-shaped
/// string; the editor keeps a structured row view in sync with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolData {
    pub name: String,
    pub description: String,
    pub parameters: String,
}

impl Default for ToolData {
    fn default() -> Self {
        Self {
            name: default_tool_name(),
            description: default_tool_description(),
            parameters: default_tool_schema(),
        }
    }
}

/// Configuration for a one-shot text generation node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateTextData {
    pub provider: String,
    pub model: String,
    pub model_format: String,
    pub import_statement: String,
    pub prompt: String,
}

impl Default for GenerateTextData {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            model_format: default_model_format(),
            import_statement: default_import_statement(),
            prompt: String::new(),
        }
    }
}

/// Configuration for a structured object generation node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateObjectData {
    pub model: String,
    pub schema: String,
    pub prompt: String,
}

impl Default for GenerateObjectData {
    fn default() -> Self {
        Self {
            model: default_model(),
            schema: default_object_schema(),
            prompt: String::new(),
        }
    }
}

/// Configuration for a structured object streaming node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamObjectData {
    pub provider: String,
    pub model: String,
    pub model_format: String,
    pub import_statement: String,
    pub schema: String,
    pub prompt: String,
    pub system: String,
}

impl Default for StreamObjectData {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            model_format: default_model_format(),
            import_statement: default_import_statement(),
            schema: default_object_schema(),
            prompt: String::new(),
            system: String::new(),
        }
    }
}
