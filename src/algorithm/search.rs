use crate::graph::*;
use log::{debug, trace};
use std::collections::VecDeque;

/// Progress of a vertex during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not reached yet.
    Unvisited,
    /// Reached, but its successors may not have been scanned.
    Discovered,
    /// Reached and all its successors scanned.
    Finished,
}

/// Outcome of a single-source search, indexed by vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    source: VertexId,
    color: Vec<Color>,
    distance: Vec<Option<usize>>,
    predecessor: Vec<Option<VertexId>>,
}

impl SearchResult {
    fn start(vertex_size: usize, source: VertexId) -> Self {
        let mut res = Self {
            source,
            color: vec![Color::Unvisited; vertex_size],
            distance: vec![None; vertex_size],
            predecessor: vec![None; vertex_size],
        };
        res.color[source.to_raw()] = Color::Discovered;
        res.distance[source.to_raw()] = Some(0);
        res
    }

    fn discover(&mut self, v: VertexId, from: VertexId) {
        let d = self.distance[from.to_raw()].map(|d| d + 1);
        self.color[v.to_raw()] = Color::Discovered;
        self.distance[v.to_raw()] = d;
        self.predecessor[v.to_raw()] = Some(from);
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn color(&self, v: &VertexId) -> Color {
        self.color[v.to_raw()]
    }

    /// Hops from the source, or `None` for unreached vertices.
    pub fn distance(&self, v: &VertexId) -> Option<usize> {
        self.distance[v.to_raw()]
    }

    pub fn predecessor(&self, v: &VertexId) -> Option<VertexId> {
        self.predecessor[v.to_raw()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    pub fn distances(&self) -> &[Option<usize>] {
        &self.distance
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessor
    }

    pub fn is_reached(&self, v: &VertexId) -> bool {
        self.color(v) != Color::Unvisited
    }

    /// Reached vertices in ascending order.
    pub fn reached(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.color
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != Color::Unvisited)
            .map(|(i, _)| VertexId::new(i))
    }

    pub fn finished_count(&self) -> usize {
        self.color.iter().filter(|c| **c == Color::Finished).count()
    }

    /// Walks the predecessor chain back from `v`.
    /// Returns the vertices from the source to `v`, or `None` if `v` was not reached.
    pub fn path_to(&self, v: &VertexId) -> Option<Vec<VertexId>> {
        let mut res = vec![*v];
        let mut cur = *v;
        while cur != self.source {
            cur = self.predecessor(&cur)?;
            res.push(cur);
        }
        res.reverse();
        Some(res)
    }
}

/// The to-be-scanned vertices of a search.
/// A queue makes a breadth-first search, a stack a depth-first one.
trait Frontier {
    fn with_source(source: VertexId) -> Self;
    fn put(&mut self, v: VertexId);
    fn take(&mut self) -> Option<VertexId>;
}

impl Frontier for VecDeque<VertexId> {
    fn with_source(source: VertexId) -> Self {
        VecDeque::from(vec![source])
    }

    fn put(&mut self, v: VertexId) {
        self.push_back(v);
    }

    fn take(&mut self) -> Option<VertexId> {
        self.pop_front()
    }
}

impl Frontier for Vec<VertexId> {
    fn with_source(source: VertexId) -> Self {
        vec![source]
    }

    fn put(&mut self, v: VertexId) {
        self.push(v);
    }

    fn take(&mut self) -> Option<VertexId> {
        self.pop()
    }
}

/// Three-color search.
/// Vertices are colored on discovery, so none enters the frontier twice.
fn search<G, F>(graph: &G, source: &VertexId) -> SearchResult
where
    G: QueryableGraph,
    F: Frontier,
{
    assert!(
        graph.contains_vertex(source),
        "vertex {} out of range 0..{}",
        source,
        graph.vertex_size()
    );
    let mut res = SearchResult::start(graph.vertex_size(), *source);
    let mut frontier = F::with_source(*source);
    while let Some(u) = frontier.take() {
        trace!("scanning {}", u);
        for v in graph.neighbors(&u) {
            if res.color(v) == Color::Unvisited {
                res.discover(*v, u);
                frontier.put(*v);
            }
        }
        res.color[u.to_raw()] = Color::Finished;
    }
    debug!(
        "search from {} reached {} of {} vertices",
        source,
        res.finished_count(),
        graph.vertex_size()
    );
    res
}

pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Single-source shortest paths in hops.
    /// Successors are scanned in connection order.
    fn bfs(&self, source: &VertexId) -> SearchResult {
        search::<_, VecDeque<VertexId>>(self, source)
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Like [`BreadthFirstSearch::bfs`] but with a stack as the frontier.
    /// Distances and predecessors describe the discovery tree, not shortest paths.
    fn dfs(&self, source: &VertexId) -> SearchResult {
        search::<_, Vec<VertexId>>(self, source)
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}
