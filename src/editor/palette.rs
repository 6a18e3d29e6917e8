//! The node palette: the draggable entries shown in the editor sidebar and
//! the payload channel they use to hand a node type tag to the canvas.

use crate::graph::NodeKind;

/// The drag payload key the palette writes its node type tag under.
pub const DRAG_PAYLOAD_KEY: &str = "application/reactflow";

/// One draggable palette card.
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub kind: NodeKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// A documentation link shown under the palette.
#[derive(Debug, Clone, Copy)]
pub struct DocLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// The entries the palette offers, in display order.
pub const ENTRIES: &[PaletteEntry] = &[
    PaletteEntry {
        kind: NodeKind::StreamText,
        title: "Stream Text",
        description: "Stream text responses with AI SDK",
    },
    PaletteEntry {
        kind: NodeKind::Tool,
        title: "Tool",
        description: "Create a tool for the AI to use",
    },
];

pub const DOC_LINKS: &[DocLink] = &[
    DocLink {
        title: "Generating Text",
        url: "https://sdk.vercel.ai/docs/ai-sdk-core/generating-text",
    },
    DocLink {
        title: "Tool Calling",
        url: "https://sdk.vercel.ai/docs/ai-sdk-core/tool-calling",
    },
];

/// The payload a palette entry writes when a drag starts.
pub fn drag_payload(kind: NodeKind) -> &'static str {
    kind.tag()
}
