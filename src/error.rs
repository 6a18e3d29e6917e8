use crate::graph::NodeKind;
use thiserror::Error;

/// Errors that can occur when converting a custom editor format into a
/// kumiki `GraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Node '{node_id}' carries an unrecognized node type tag: '{tag}'")]
    UnknownNodeKind { node_id: String, tag: String },

    #[error("Node '{node_id}' has malformed data: {message}")]
    InvalidNodeData { node_id: String, message: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while loading or parsing an editor document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to parse document JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read document file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Conversion(#[from] GraphConversionError),
}

/// Errors that can occur when mutating an editor document.
#[derive(Error, Debug, Clone)]
pub enum EditorError {
    #[error("Node '{0}' not found in the document")]
    NodeNotFound(String),

    #[error("Update for node '{node_id}' expects a {expected} node, but found {found}")]
    KindMismatch {
        node_id: String,
        expected: NodeKind,
        found: NodeKind,
    },

    #[error("Connection from '{source_id}' to '{target}' is invalid: {message}")]
    InvalidConnection {
        source_id: String,
        target: String,
        message: String,
    },
}
