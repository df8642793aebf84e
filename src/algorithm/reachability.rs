use crate::graph::*;
use log::trace;

/// Depth-first reachability as a visited set, one flag per vertex.
pub trait Reachability
where
    Self: QueryableGraph + Sized,
{
    /// Vertices reachable from `source`, found with an explicit stack.
    ///
    /// Visits vertices in the same order as [`Reachability::reachable_from_recursive`],
    /// but its depth is bounded by memory rather than by the call stack.
    fn reachable_from(&self, source: &VertexId) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_size()];
        visit_with_stack(self, *source, &mut visited);
        visited
    }

    /// Vertices reachable from `source`, found by recursion.
    ///
    /// Recursion goes as deep as the longest explored path,
    /// so prefer [`Reachability::reachable_from`] on long chains.
    fn reachable_from_recursive(&self, source: &VertexId) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_size()];
        visit_recursively(self, *source, &mut visited);
        visited
    }
}

impl<G: QueryableGraph> Reachability for G {}

fn visit_with_stack<G>(graph: &G, source: VertexId, visited: &mut [bool])
where
    G: QueryableGraph,
{
    visited[source.to_raw()] = true;
    // (vertex, index of the next neighbor to scan)
    let mut stack = vec![(source, 0usize)];
    while let Some(top) = stack.last_mut() {
        let (u, next) = *top;
        match graph.neighbors(&u).get(next) {
            None => {
                stack.pop();
            }
            Some(v) => {
                top.1 += 1;
                if !visited[v.to_raw()] {
                    trace!("visiting {} from {}", v, u);
                    visited[v.to_raw()] = true;
                    stack.push((*v, 0));
                }
            }
        }
    }
}

fn visit_recursively<G>(graph: &G, u: VertexId, visited: &mut [bool])
where
    G: QueryableGraph,
{
    visited[u.to_raw()] = true;
    for v in graph.neighbors(&u) {
        if !visited[v.to_raw()] {
            visit_recursively(graph, *v, visited);
        }
    }
}
