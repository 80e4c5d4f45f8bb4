//! Command implementations
//!
//! The tool has a single user-facing command: `graph`, which drives the
//! whole pipeline from reference enumeration to rendered output.

pub mod graph;
