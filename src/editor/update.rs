//! Typed update messages for node data.
//!
//! The original editor's form components wrote field edits directly into a
//! shared mutable data object. Here every edit is an explicit message applied
//! through [`EditorDocument::apply`](super::EditorDocument::apply), so the
//! document stays the single owner of node state.

use super::parameters::Parameter;
use crate::graph::NodeKind;
use crate::registry::ModelSelection;

/// A field edit targeted at one node. The variant must match the node's kind.
#[derive(Debug, Clone)]
pub enum NodeUpdate {
    StreamText(StreamTextUpdate),
    Tool(ToolUpdate),
    GenerateText(GenerateTextUpdate),
    GenerateObject(GenerateObjectUpdate),
    StreamObject(StreamObjectUpdate),
}

impl NodeUpdate {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeUpdate::StreamText(_) => NodeKind::StreamText,
            NodeUpdate::Tool(_) => NodeKind::Tool,
            NodeUpdate::GenerateText(_) => NodeKind::GenerateText,
            NodeUpdate::GenerateObject(_) => NodeKind::GenerateObject,
            NodeUpdate::StreamObject(_) => NodeKind::StreamObject,
        }
    }
}

#[derive(Debug, Clone)]
pub enum StreamTextUpdate {
    SystemPrompt(String),
    /// Toggle the request-messages pass-through.
    Messages(bool),
    /// Clamped to a minimum of 1, as the form's number input does.
    MaxSteps(u32),
    /// A full provider/model selection from the picker.
    Model(ModelSelection),
}

#[derive(Debug, Clone)]
pub enum ToolUpdate {
    Name(String),
    Description(String),
    /// Replaces the parameter rows; the schema string is regenerated.
    Parameters(Vec<Parameter>),
    /// Raw schema string edit; the rows are re-derived from it on read.
    Schema(String),
}

#[derive(Debug, Clone)]
pub enum GenerateTextUpdate {
    Model(ModelSelection),
    Prompt(String),
}

#[derive(Debug, Clone)]
pub enum GenerateObjectUpdate {
    Model(String),
    Schema(String),
    Prompt(String),
}

#[derive(Debug, Clone)]
pub enum StreamObjectUpdate {
    Model(ModelSelection),
    Schema(String),
    Prompt(String),
    System(String),
}
