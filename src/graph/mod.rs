//! Graphs over a fixed set of integer vertices.
//!
//! # Vertices and edges
//!
//! A graph with `n` vertices owns exactly the vertices `VertexId(0)` to `VertexId(n - 1)`.
//! The vertex set never changes after construction, only edges do.
//! `VertexId` is essentially `usize`, so algorithms may copy and store it freely.
//!
//! # Orientation
//!
//! [`Graph`] is parameterized by an [`Orientation`].
//! `Graph<Undirected>` stores every edge in both endpoints' adjacency lists
//! and in a lower-triangular matrix,
//! while `Graph<Directed>` stores an edge only at its source and in a full matrix.
//! Everything else, traversals included, is shared.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod orientation;
pub use self::orientation::*;
mod matrix;
pub(crate) use self::matrix::*;
mod adjacency;
pub use self::adjacency::*;
mod petgraph_bridge;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub(crate) use self::tests::*;
