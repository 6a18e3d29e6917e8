use serde::Deserialize;

use crate::error::{DocumentError, GraphConversionError};
use crate::graph::{
    EdgeDefinition, GraphDefinition, IntoGraph, NodeData, NodeDefinition, NodeKind, Position,
};

/// A node as serialized by the visual editor. The `data` payload stays loose
/// JSON here; typed extraction happens during graph conversion so missing
/// fields can fall back to the node kind's defaults.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// An edge as serialized by the visual editor.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Complete editor document structure (React-Flow shaped JSON).
#[derive(Debug, Deserialize, Default)]
pub struct UiDocument {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl UiDocument {
    pub fn from_str(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_str(&content)
    }
}

impl IntoGraph for UiDocument {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            let kind = NodeKind::from_tag(&node.kind).ok_or_else(|| {
                GraphConversionError::UnknownNodeKind {
                    node_id: node.id.clone(),
                    tag: node.kind.clone(),
                }
            })?;
            let data = extract_data(kind, &node.id, node.data)?;
            nodes.push(NodeDefinition {
                id: node.id,
                kind,
                position: node.position,
                data,
            });
        }

        let edges = self
            .edges
            .into_iter()
            .map(|edge| {
                let id = if edge.id.is_empty() {
                    format!("e-{}-{}", edge.source, edge.target)
                } else {
                    edge.id
                };
                EdgeDefinition {
                    id,
                    source: edge.source,
                    target: edge.target,
                }
            })
            .collect();

        Ok(GraphDefinition { nodes, edges })
    }
}

/// Deserializes the loose data payload into the kind's typed record. A null
/// or absent payload means a freshly dropped node: full defaults apply.
fn extract_data(
    kind: NodeKind,
    node_id: &str,
    value: serde_json::Value,
) -> Result<NodeData, GraphConversionError> {
    if value.is_null() {
        return Ok(NodeData::default_for(kind));
    }
    let invalid = |e: serde_json::Error| GraphConversionError::InvalidNodeData {
        node_id: node_id.to_string(),
        message: e.to_string(),
    };
    Ok(match kind {
        NodeKind::StreamText => {
            NodeData::StreamText(serde_json::from_value(value).map_err(invalid)?)
        }
        NodeKind::Tool => NodeData::Tool(serde_json::from_value(value).map_err(invalid)?),
        NodeKind::GenerateText => {
            NodeData::GenerateText(serde_json::from_value(value).map_err(invalid)?)
        }
        NodeKind::GenerateObject => {
            NodeData::GenerateObject(serde_json::from_value(value).map_err(invalid)?)
        }
        NodeKind::StreamObject => {
            NodeData::StreamObject(serde_json::from_value(value).map_err(invalid)?)
        }
    })
}
