use crate::{algorithm::BreadthFirstSearch, graph::*};

pub trait Connectivity
where
    Self: BreadthFirstSearch,
{
    /// Whether a breadth-first search from vertex 0 finishes every vertex.
    /// On directed graphs this follows arcs only.
    fn is_connected(&self) -> bool {
        self.bfs(&VertexId::MIN).finished_count() == self.vertex_size()
    }

    /// Connected with exactly `n - 1` edges.
    fn is_tree(&self) -> bool {
        self.is_connected() && self.edge_size() == self.vertex_size() - 1
    }
}

impl<G: BreadthFirstSearch> Connectivity for G {}
