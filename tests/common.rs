//! Common test utilities for building editor graphs.
use kumiki::prelude::*;

/// Creates a streamText node with the given data.
#[allow(dead_code)]
pub fn stream_text_node(id: &str, data: StreamTextData) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        kind: NodeKind::StreamText,
        position: Position::default(),
        data: NodeData::StreamText(data),
    }
}

/// Creates a tool node with the given name and otherwise default data.
#[allow(dead_code)]
pub fn tool_node(id: &str, name: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        kind: NodeKind::Tool,
        position: Position::default(),
        data: NodeData::Tool(ToolData {
            name: name.to_string(),
            ..ToolData::default()
        }),
    }
}

/// A graph with a single default streamText node.
#[allow(dead_code)]
pub fn simple_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![stream_text_node("streamText-1", StreamTextData::default())],
        edges: vec![],
    }
}

/// A graph with one default streamText node followed by one tool node per name.
#[allow(dead_code)]
pub fn graph_with_tools(names: &[&str]) -> GraphDefinition {
    let mut nodes = vec![stream_text_node("streamText-1", StreamTextData::default())];
    for (i, name) in names.iter().enumerate() {
        nodes.push(tool_node(&format!("tool-{}", i + 1), name));
    }
    GraphDefinition {
        nodes,
        edges: vec![],
    }
}
