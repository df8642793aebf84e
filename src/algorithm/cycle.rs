use crate::{algorithm::Color, graph::*};
use log::debug;

pub trait CycleDetection
where
    Self: QueryableGraph + DirectedOrNot + Sized,
{
    /// Whether any cycle exists, self-loops included.
    ///
    /// Runs a depth-first search over every component and looks for an edge
    /// into a vertex that is still on the search path.
    /// On undirected graphs, the edge back to the parent does not count.
    fn is_cyclic(&self) -> bool {
        let mut color = vec![Color::Unvisited; self.vertex_size()];
        for root in self.iter_vertices() {
            if color[root.to_raw()] == Color::Unvisited && cycle_from(self, root, &mut color) {
                debug!("found a cycle reachable from {}", root);
                return true;
            }
        }
        false
    }
}

impl<G: QueryableGraph + DirectedOrNot> CycleDetection for G {}

fn cycle_from<G>(graph: &G, root: VertexId, color: &mut [Color]) -> bool
where
    G: QueryableGraph + DirectedOrNot,
{
    color[root.to_raw()] = Color::Discovered;
    // (vertex, its parent on the path, index of the next neighbor to scan)
    let mut stack: Vec<(VertexId, Option<VertexId>, usize)> = vec![(root, None, 0)];
    while let Some(top) = stack.last_mut() {
        let (u, parent, next) = *top;
        let v = match graph.neighbors(&u).get(next) {
            Some(v) => *v,
            None => {
                color[u.to_raw()] = Color::Finished;
                stack.pop();
                continue;
            }
        };
        top.2 += 1;
        if !G::DIRECTED_OR_NOT && Some(v) == parent {
            continue;
        }
        match color[v.to_raw()] {
            Color::Unvisited => {
                color[v.to_raw()] = Color::Discovered;
                stack.push((v, Some(u), 0));
            }
            Color::Discovered => return true,
            Color::Finished => {}
        }
    }
    false
}
