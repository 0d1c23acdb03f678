//! Graph model implementations.
//!
//! - [`Graph`] - directed graph with dense vertex indexing and mirrored
//!   in-neighbor sets
//! - [`UndirectedGraph`] - undirected view storing each edge as two
//!   mirrored arcs
//! - [`ArcMarks`] - sparse overlay mapping ordered vertex pairs to numeric
//!   values (weights, capacities, costs, flows)

mod directed;
mod marks;
mod undirected;

pub use directed::Graph;
pub use marks::ArcMarks;
pub use undirected::UndirectedGraph;
