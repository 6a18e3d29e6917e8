use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a kumiki `GraphDefinition`.
///
/// This is the primary extension point for making kumiki format-agnostic. By
/// implementing this trait on your own document structs, you provide a
/// translation layer that allows the code generator to process your custom
/// editor format. The built-in React-Flow-shaped format in [`crate::ui`]
/// implements it the same way.
///
/// # Example
///
/// ```rust,no_run
/// use kumiki::error::GraphConversionError;
/// use kumiki::graph::{
///     GraphDefinition, IntoGraph, NodeData, NodeDefinition, NodeKind, Position,
/// };
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomNode { id: String, kind: String }
/// struct MyCustomDocument { nodes: Vec<MyCustomNode> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyCustomDocument {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let mut nodes = Vec::new();
///         for node in self.nodes {
///             let kind = NodeKind::from_tag(&node.kind)
///                 .ok_or_else(|| GraphConversionError::UnknownNodeKind {
///                     node_id: node.id.clone(),
///                     tag: node.kind.clone(),
///                 })?;
///             nodes.push(NodeDefinition {
///                 id: node.id,
///                 kind,
///                 position: Position::default(),
///                 data: NodeData::default_for(kind),
///             });
///         }
///
///         Ok(GraphDefinition {
///             nodes,
///             edges: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a kumiki-compatible editor graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
