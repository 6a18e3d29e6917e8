//! The editor document: the single state-owning component behind the canvas.
//!
//! Holds the node and edge arrays as the one source of truth and exposes the
//! canvas gestures as explicit operations: dropping a palette entry, wiring a
//! connection, deleting a node, and applying typed field updates. All
//! mutation is synchronous; code generation reads the graph snapshot between
//! operations.

pub mod palette;
pub mod parameters;
pub mod update;
pub mod viewport;

pub use parameters::{Parameter, ParameterKind};
pub use update::{
    GenerateObjectUpdate, GenerateTextUpdate, NodeUpdate, StreamObjectUpdate, StreamTextUpdate,
    ToolUpdate,
};
pub use viewport::Viewport;

use crate::error::EditorError;
use crate::graph::{
    EdgeDefinition, GraphDefinition, NodeData, NodeDefinition, NodeKind, Position,
};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct EditorDocument {
    graph: GraphDefinition,
    viewport: Viewport,
}

impl EditorDocument {
    pub fn new() -> Self {
        Self {
            graph: GraphDefinition::default(),
            viewport: Viewport::new(),
        }
    }

    /// Wraps an existing graph, e.g. one loaded from a UI document.
    pub fn from_graph(graph: GraphDefinition) -> Self {
        Self {
            graph,
            viewport: Viewport::new(),
        }
    }

    pub fn graph(&self) -> &GraphDefinition {
        &self.graph
    }

    pub fn into_graph(self) -> GraphDefinition {
        self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Handles a palette drop: the payload is the node type tag carried by
    /// the drag gesture, the position is in screen space relative to the
    /// canvas origin. An unrecognized tag is ignored, not an error.
    pub fn drop_from_palette(&mut self, payload: &str, screen: Position) -> Option<String> {
        let kind = NodeKind::from_tag(payload)?;
        let position = self.viewport.project(screen);
        Some(self.drop_node(kind, position))
    }

    /// Creates a node with the kind's default data at a canvas-space
    /// position. Returns the new node's id (`<tag>-<unix millis>`, bumped on
    /// collision so ids stay unique within the document).
    pub fn drop_node(&mut self, kind: NodeKind, position: Position) -> String {
        let id = self.next_node_id(kind);
        self.graph.nodes.push(NodeDefinition {
            id: id.clone(),
            kind,
            position,
            data: NodeData::default_for(kind),
        });
        id
    }

    fn next_node_id(&self, kind: NodeKind) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        loop {
            let id = format!("{}-{}", kind.tag(), millis);
            if self.graph.node(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    /// Records a connection between two existing nodes. Edges carry no
    /// semantic weight; the generator never reads them. A repeated identical
    /// connection returns the existing edge id instead of duplicating it.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, EditorError> {
        if source == target {
            return Err(EditorError::InvalidConnection {
                source_id: source.to_string(),
                target: target.to_string(),
                message: "a node cannot connect to itself".to_string(),
            });
        }
        for endpoint in [source, target] {
            if self.graph.node(endpoint).is_none() {
                return Err(EditorError::NodeNotFound(endpoint.to_string()));
            }
        }
        if let Some(existing) = self
            .graph
            .edges
            .iter()
            .find(|e| e.source == source && e.target == target)
        {
            return Ok(existing.id.clone());
        }

        let id = format!("e-{}-{}", source, target);
        self.graph.edges.push(EdgeDefinition {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(id)
    }

    /// Deletes a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Result<(), EditorError> {
        let before = self.graph.nodes.len();
        self.graph.nodes.retain(|n| n.id != id);
        if self.graph.nodes.len() == before {
            return Err(EditorError::NodeNotFound(id.to_string()));
        }
        self.graph.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Deletes an edge. Returns false if no edge had the id.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.graph.edges.len();
        self.graph.edges.retain(|e| e.id != id);
        self.graph.edges.len() != before
    }

    /// Moves a node to a new canvas-space position.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), EditorError> {
        let node = self
            .graph
            .node_mut(id)
            .ok_or_else(|| EditorError::NodeNotFound(id.to_string()))?;
        node.position = position;
        Ok(())
    }

    /// Applies a typed field update to a node. The update variant must match
    /// the node's kind.
    pub fn apply(&mut self, id: &str, update: NodeUpdate) -> Result<(), EditorError> {
        let node = self
            .graph
            .node_mut(id)
            .ok_or_else(|| EditorError::NodeNotFound(id.to_string()))?;

        let mismatch = |found: NodeKind| EditorError::KindMismatch {
            node_id: id.to_string(),
            expected: update.kind(),
            found,
        };

        match (&mut node.data, &update) {
            (NodeData::StreamText(data), NodeUpdate::StreamText(field)) => match field {
                StreamTextUpdate::SystemPrompt(prompt) => data.system_prompt = prompt.clone(),
                StreamTextUpdate::Messages(enabled) => data.messages = *enabled,
                StreamTextUpdate::MaxSteps(steps) => data.max_steps = (*steps).max(1),
                StreamTextUpdate::Model(selection) => {
                    data.provider = selection.provider.clone();
                    data.model = selection.model.clone();
                    data.model_format = selection.model_format.clone();
                    data.import_statement = selection.import_statement.clone();
                }
            },
            (NodeData::Tool(data), NodeUpdate::Tool(field)) => match field {
                ToolUpdate::Name(name) => data.name = name.clone(),
                ToolUpdate::Description(description) => data.description = description.clone(),
                ToolUpdate::Parameters(rows) => data.parameters = Parameter::to_schema(rows),
                ToolUpdate::Schema(schema) => data.parameters = schema.clone(),
            },
            (NodeData::GenerateText(data), NodeUpdate::GenerateText(field)) => match field {
                GenerateTextUpdate::Model(selection) => {
                    data.provider = selection.provider.clone();
                    data.model = selection.model.clone();
                    data.model_format = selection.model_format.clone();
                    data.import_statement = selection.import_statement.clone();
                }
                GenerateTextUpdate::Prompt(prompt) => data.prompt = prompt.clone(),
            },
            (NodeData::GenerateObject(data), NodeUpdate::GenerateObject(field)) => match field {
                GenerateObjectUpdate::Model(model) => data.model = model.clone(),
                GenerateObjectUpdate::Schema(schema) => data.schema = schema.clone(),
                GenerateObjectUpdate::Prompt(prompt) => data.prompt = prompt.clone(),
            },
            (NodeData::StreamObject(data), NodeUpdate::StreamObject(field)) => match field {
                StreamObjectUpdate::Model(selection) => {
                    data.provider = selection.provider.clone();
                    data.model = selection.model.clone();
                    data.model_format = selection.model_format.clone();
                    data.import_statement = selection.import_statement.clone();
                }
                StreamObjectUpdate::Schema(schema) => data.schema = schema.clone(),
                StreamObjectUpdate::Prompt(prompt) => data.prompt = prompt.clone(),
                StreamObjectUpdate::System(system) => data.system = system.clone(),
            },
            (data, _) => return Err(mismatch(data.kind())),
        }

        Ok(())
    }

    /// The parameter rows for a tool node, derived from its schema string.
    pub fn tool_parameters(&self, id: &str) -> Result<Vec<Parameter>, EditorError> {
        match self.graph.node(id) {
            Some(NodeDefinition {
                data: NodeData::Tool(data),
                ..
            }) => Ok(Parameter::from_schema(&data.parameters)),
            Some(node) => Err(EditorError::KindMismatch {
                node_id: id.to_string(),
                expected: NodeKind::Tool,
                found: node.kind,
            }),
            None => Err(EditorError::NodeNotFound(id.to_string())),
        }
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}
