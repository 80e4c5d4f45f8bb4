//! Data structures and algorithms
//!
//! This module contains the core types and algorithms of the graph
//! outputter:
//!
//! - `branch`: symbolic reference names
//! - `core`: shared utilities (pager wrapper)
//! - `history`: divergence tree construction, linearization, filtering
//! - `objects`: git object types (commit, tag) and identifiers
//! - `render`: gitgraph.js and plain-text renderers for the event stream

pub mod branch;
pub mod core;
pub mod history;
pub mod objects;
pub mod render;
