use crate::graph::*;

/// Graphs whose vertex set is fixed at construction but whose edges come and go.
pub trait EdgeMutableGraph {
    /// Adds an edge from `a` to `b`.
    /// Connecting an already connected pair leaves the graph unchanged.
    fn connect(&mut self, a: VertexId, b: VertexId);

    /// Removes the edge from `a` to `b` if there is one.
    fn disconnect(&mut self, a: VertexId, b: VertexId);
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool;

    /// Successors of `v` in the order they were connected.
    fn neighbors(&self, v: &VertexId) -> &[VertexId];

    fn degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).len()
    }

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
