use crate::{algorithm::BreadthFirstSearch, graph::*};

/// A fewest-hops path, or the fact that there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPath {
    /// Vertices from the source to the target, both included.
    Found(Vec<VertexId>),
    NoPath { from: VertexId, to: VertexId },
}

impl ShortestPath {
    pub fn vertices(&self) -> Option<&[VertexId]> {
        match self {
            ShortestPath::Found(path) => Some(path.as_slice()),
            ShortestPath::NoPath { .. } => None,
        }
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> Option<usize> {
        self.vertices().map(|p| p.len() - 1)
    }
}

/// One vertex per line, or a line saying that no path exists.
impl std::fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortestPath::Found(path) => {
                for v in path {
                    writeln!(f, "{}", v)?;
                }
                Ok(())
            }
            ShortestPath::NoPath { from, to } => {
                writeln!(f, "No path exists from {} to {}", from, to)
            }
        }
    }
}

pub trait ShortestPaths
where
    Self: BreadthFirstSearch,
{
    /// Reconstructs the path found by a breadth-first search from `source`.
    fn shortest_path(&self, source: &VertexId, target: &VertexId) -> ShortestPath {
        assert!(
            self.contains_vertex(target),
            "vertex {} out of range 0..{}",
            target,
            self.vertex_size()
        );
        match self.bfs(source).path_to(target) {
            Some(path) => ShortestPath::Found(path),
            None => ShortestPath::NoPath {
                from: *source,
                to: *target,
            },
        }
    }

    /// Writes [`ShortestPaths::shortest_path`] to `out`.
    fn print_path<W>(&self, source: &VertexId, target: &VertexId, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        write!(out, "{}", self.shortest_path(source, target))
    }
}

impl<G: BreadthFirstSearch> ShortestPaths for G {}
