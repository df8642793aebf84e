use super::VertexId;

/// An edge as enumerated from a graph's adjacency lists.
///
/// For undirected graphs, every edge is enumerated once with `source <= sink`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }

    /// Returns `(source, sink)` with the smaller endpoint first.
    pub fn normalized(&self) -> (VertexId, VertexId) {
        if self.source <= self.sink {
            (self.source, self.sink)
        } else {
            (self.sink, self.source)
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, sink): (VertexId, VertexId)) -> Self {
        Self { source, sink }
    }
}
