//! Small undirected and directed graphs over the vertices `0..n`,
//! with breadth-/depth-first traversals, structural queries and Prüfer codes.
//!
//! ```rust
//! use cayleygraph::{algorithm::*, graph::*};
//!
//! let g = UndirectedGraph::with_edges(
//!     9,
//!     [(0, 1), (2, 3), (1, 2), (1, 3), (3, 4), (6, 7), (6, 8)],
//! );
//! assert_eq!(g.connected_components_no_singletons().len(), 2);
//! assert!(g.is_cyclic());
//! assert!(!g.is_connected());
//!
//! let d = DirectedGraph::with_edges(5, [(2, 3), (0, 3), (3, 4)]);
//! let path = d.shortest_path(&VertexId::new(2), &VertexId::new(4));
//! assert_eq!(path.to_string(), "2\n3\n4\n");
//! ```
//!
//! Graphs are not synchronized; share them across threads only behind a lock.

pub mod algorithm;
pub mod graph;
pub mod prufer;
