//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! kumiki crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kumiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load an editor document and generate the route source
//! let document_json = std::fs::read_to_string("path/to/document.json")?;
//! let document = UiDocument::from_str(&document_json)?;
//! let graph = document.into_graph()?;
//!
//! let source = generate_route(&graph);
//! println!("{}", source);
//! # Ok(())
//! # }
//! ```

// Code generation
pub use crate::codegen::{RouteGenerator, generate_route, json_schema_to_zod};

// Editor state and update messages
pub use crate::editor::{EditorDocument, NodeUpdate, Parameter, ParameterKind, Viewport};

// Graph model
pub use crate::graph::{
    EdgeDefinition, GraphDefinition, IntoGraph, NodeData, NodeDefinition, NodeKind, Position,
    StreamTextData, ToolData,
};

// Provider registry
pub use crate::registry::{Capability, ModelSelection, Provider, Registry};

// Editor document wire format
pub use crate::ui::UiDocument;

// Error types
pub use crate::error::{DocumentError, EditorError, GraphConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
