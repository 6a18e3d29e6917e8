//! # Kumiki - Node Graph to API Route Code Generation
//!
//! **Kumiki** is the headless core of a drag-and-drop editor for assembling
//! AI SDK primitives. A graph of typed nodes (a text-streaming node, tool
//! nodes) is held by a state-owning editor document, and a pure generator
//! walks the node list to emit the source of a complete server API route in
//! the AI SDK's TypeScript conventions.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of an editor graph. The primary workflow is:
//!
//! 1.  **Load Your Document**: Parse the editor's JSON (the built-in
//!     React-Flow-shaped [`ui::UiDocument`]), or your own format via the
//!     [`graph::IntoGraph`] trait.
//! 2.  **Edit**: Wrap the graph in an [`editor::EditorDocument`] and mutate it
//!     through canvas operations and typed [`editor::NodeUpdate`] messages.
//! 3.  **Generate**: Run [`codegen::generate_route`] over the graph snapshot
//!     to get the route source string. Generation is pure and re-entrant; it
//!     is safe to re-run after every edit.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiki::prelude::*;
//! use kumiki::editor::{StreamTextUpdate, ToolUpdate};
//!
//! fn main() {
//!     let registry = Registry::new();
//!     let mut document = EditorDocument::new();
//!
//!     // Drop a streamText node and a tool node onto the canvas.
//!     let stream_id = document.drop_node(NodeKind::StreamText, Position { x: 100.0, y: 80.0 });
//!     let tool_id = document.drop_node(NodeKind::Tool, Position { x: 100.0, y: 260.0 });
//!
//!     // Point the stream node at a different provider via the registry.
//!     let selection = registry.selection("@ai-sdk/anthropic", "claude-3-5-haiku-20241022");
//!     document
//!         .apply(&stream_id, NodeUpdate::StreamText(StreamTextUpdate::Model(selection)))
//!         .unwrap();
//!     document
//!         .apply(&tool_id, NodeUpdate::Tool(ToolUpdate::Name("getWeather".to_string())))
//!         .unwrap();
//!
//!     // Edges are decorative; connect the nodes anyway for the canvas.
//!     document.connect(&stream_id, &tool_id).unwrap();
//!
//!     let source = generate_route(document.graph());
//!     assert!(source.contains("export const getWeather"));
//!     println!("{}", source);
//! }
//! ```

pub mod codegen;
pub mod editor;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod ui;
