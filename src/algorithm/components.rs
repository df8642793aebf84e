use crate::{algorithm::Reachability, graph::*};
use log::debug;

/// Components in ascending order of their lowest vertex, each sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents(Vec<Vec<VertexId>>);

impl ConnectedComponents {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        self.0.iter().map(|c| c.as_slice())
    }

    pub fn into_inner(self) -> Vec<Vec<VertexId>> {
        self.0
    }
}

impl std::fmt::Display for ConnectedComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            write!(f, "Component {}:", i + 1)?;
            for v in component {
                write!(f, " {}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub trait Components
where
    Self: Reachability,
{
    /// Picks the lowest unvisited vertex, collects everything reachable from it,
    /// and repeats until every vertex is visited.
    ///
    /// On directed graphs a component is the reachable set of its first vertex,
    /// which may overlap with earlier components.
    fn connected_components(&self) -> ConnectedComponents {
        let mut visited = vec![false; self.vertex_size()];
        let mut res = vec![];
        for v in self.iter_vertices() {
            if visited[v.to_raw()] {
                continue;
            }
            let reached = self.reachable_from(&v);
            let component: Vec<_> = reached
                .iter()
                .enumerate()
                .filter(|(_, r)| **r)
                .map(|(i, _)| VertexId::new(i))
                .collect();
            for u in component.iter() {
                visited[u.to_raw()] = true;
            }
            res.push(component);
        }
        debug!("found {} components", res.len());
        ConnectedComponents(res)
    }

    /// Like [`Components::connected_components`] but leaves out isolated vertices.
    fn connected_components_no_singletons(&self) -> ConnectedComponents {
        let all = self.connected_components().into_inner();
        ConnectedComponents(all.into_iter().filter(|c| c.len() > 1).collect())
    }
}

impl<G: Reachability> Components for G {}
