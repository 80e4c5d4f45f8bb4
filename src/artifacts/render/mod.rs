//! Renderers for the linearized event stream
//!
//! Rendering is driven purely by the ordering and fields of the event
//! sequence produced by `history::linearize`; nothing here walks the tree
//! except the plain-text dump, which mirrors its nesting directly.

pub mod js_graph;
pub mod tree_dump;
