//! # arcflow-core
//!
//! Core layer for Arcflow: the directed-graph model, arc-mark overlays, and
//! pure graph transformations.
//!
//! This crate provides the shared data model every algorithm operates on.
//! It depends only on `arcflow-common`.
//!
//! ## Modules
//!
//! - [`graph`] - [`Graph`], [`UndirectedGraph`], and the [`ArcMarks`] overlay
//! - [`transform`] - Pure graph transformations (inverse, merge, split,
//!   synthetic sources and targets)

pub mod graph;
pub mod transform;

// Re-export commonly used types
pub use graph::{ArcMarks, Graph, UndirectedGraph};
