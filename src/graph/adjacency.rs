use crate::graph::*;
use log::trace;

/// A graph over the fixed vertex set `0..vertex_size`.
///
/// Edges are kept twice: as ordered adjacency lists (connection order) and as a
/// boolean adjacency matrix.
/// Both are updated by a single mutator, so they never disagree.
///
/// | Operation       | Complexity                           |
/// | --------------- | ------------------------------------ |
/// | `connect`       | $O(\deg(a) + \deg(b))$               |
/// | `disconnect`    | $O(\deg(a) + \deg(b))$               |
/// | `degree`        | $O(1)$                               |
/// | `contains_edge` | $O(1)$                               |
/// | `edge_size`     | $O(\|V\|^2)$, counted from the matrix |
///
/// Vertices out of `0..vertex_size` are programming errors and panic.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph<O: Orientation> {
    adjacency: Vec<Vec<VertexId>>,
    matrix: AdjacencyMatrix<O>,
}

/// Graph whose edges are stored symmetrically.
pub type UndirectedGraph = Graph<Undirected>;
/// Graph whose edges only run from source to sink.
pub type DirectedGraph = Graph<Directed>;

impl<O: Orientation> DirectedOrNot for Graph<O> {
    const DIRECTED_OR_NOT: bool = O::DIRECTED;
}

impl<O: Orientation> std::fmt::Debug for Graph<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if O::DIRECTED {
            writeln!(f, "DirectedGraph {{")?;
        } else {
            writeln!(f, "UndirectedGraph {{")?;
        }
        write!(f, "{:?}", self.debug())?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<O: Orientation> Graph<O> {
    /// Creates a graph with `vertex_size` isolated vertices.
    ///
    /// # Panics
    ///
    /// Panics if `vertex_size` is zero.
    pub fn new(vertex_size: usize) -> Self {
        assert!(vertex_size > 0, "a graph needs at least one vertex");
        Self {
            adjacency: vec![vec![]; vertex_size],
            matrix: AdjacencyMatrix::new(vertex_size),
        }
    }

    /// Creates a graph and connects every pair in `edges`, in order.
    pub fn with_edges<I>(vertex_size: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut res = Self::new(vertex_size);
        for (a, b) in edges {
            res.connect(VertexId::new(a), VertexId::new(b));
        }
        res
    }

    fn check_vertex(&self, v: &VertexId) {
        assert!(
            v.to_raw() < self.adjacency.len(),
            "vertex {} out of range 0..{}",
            v,
            self.adjacency.len()
        );
    }

    fn set_edge(&mut self, a: VertexId, b: VertexId, present: bool) {
        self.check_vertex(&a);
        self.check_vertex(&b);
        if present {
            self.link(a, b);
            if !O::DIRECTED {
                self.link(b, a);
            }
        } else {
            self.unlink(a, b);
            if !O::DIRECTED {
                self.unlink(b, a);
            }
        }
        self.matrix.set(&a, &b, present);
        trace!("set edge {} -> {} to {}", a, b, present);
    }

    fn link(&mut self, from: VertexId, to: VertexId) {
        let list = &mut self.adjacency[from.to_raw()];
        if !list.contains(&to) {
            list.push(to);
        }
    }

    fn unlink(&mut self, from: VertexId, to: VertexId) {
        let list = &mut self.adjacency[from.to_raw()];
        if let Some(pos) = list.iter().position(|x| *x == to) {
            list.remove(pos);
        }
    }
}

impl<O: Orientation> EdgeMutableGraph for Graph<O> {
    fn connect(&mut self, a: VertexId, b: VertexId) {
        self.set_edge(a, b, true);
    }

    fn disconnect(&mut self, a: VertexId, b: VertexId) {
        self.set_edge(a, b, false);
    }
}

impl<O: Orientation> QueryableGraph for Graph<O> {
    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_size(&self) -> usize {
        self.matrix.count_ones()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.iter_vertices().flat_map(move |v| {
            self.adjacency[v.to_raw()]
                .iter()
                .filter(move |u| O::DIRECTED || v <= **u)
                .map(move |u| Edge::new(v, *u))
        });
        Box::new(it)
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.check_vertex(source);
        self.check_vertex(sink);
        self.matrix.get(source, sink)
    }

    fn neighbors(&self, v: &VertexId) -> &[VertexId] {
        self.check_vertex(v);
        &self.adjacency[v.to_raw()]
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::quickcheck;

    fn v(x: usize) -> VertexId {
        VertexId::new(x)
    }

    #[test]
    fn undirected_connect_is_symmetric() {
        let mut g = UndirectedGraph::new(4);
        g.connect(v(0), v(1));
        g.connect(v(2), v(1));
        assert_eq!(g.neighbors(&v(1)), &[v(0), v(2)]);
        assert_eq!(g.neighbors(&v(0)), &[v(1)]);
        assert!(g.contains_edge(&v(1), &v(2)));
        assert!(g.contains_edge(&v(2), &v(1)));
        assert_eq!(g.degree(&v(1)), 2);
        assert_eq!(g.degree(&v(3)), 0);
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn connect_is_idempotent() {
        let mut g = UndirectedGraph::new(3);
        g.connect(v(0), v(1));
        let before = g.clone();
        g.connect(v(1), v(0));
        g.connect(v(0), v(1));
        assert_eq!(g, before);
    }

    #[test]
    fn disconnect_absent_edge_is_noop() {
        let mut g = UndirectedGraph::with_edges(3, [(0, 1)]);
        let before = g.clone();
        g.disconnect(v(1), v(2));
        assert_eq!(g, before);
    }

    #[test]
    fn directed_connect_is_asymmetric() {
        let mut g = DirectedGraph::new(3);
        g.connect(v(0), v(1));
        g.connect(v(0), v(1));
        assert_eq!(g.neighbors(&v(0)), &[v(1)]);
        assert!(g.neighbors(&v(1)).is_empty());
        assert!(g.contains_edge(&v(0), &v(1)));
        assert!(!g.contains_edge(&v(1), &v(0)));
        g.disconnect(v(1), v(0));
        assert!(g.contains_edge(&v(0), &v(1)));
        g.disconnect(v(0), v(1));
        assert_eq!(g.edge_size(), 0);
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut g = UndirectedGraph::new(2);
        g.connect(v(1), v(1));
        assert_eq!(g.neighbors(&v(1)), &[v(1)]);
        assert_eq!(g.edge_size(), 1);
        let edges: Vec<_> = g.iter_edges().collect();
        assert_eq!(edges, vec![Edge::new(v(1), v(1))]);
    }

    #[test]
    fn iter_edges_enumerates_undirected_edges_once() {
        let g = UndirectedGraph::with_edges(4, [(2, 0), (1, 3), (0, 1)]);
        let trial: Vec<_> = g.iter_edges().map(|e| e.normalized()).collect();
        assert_eq!(trial, vec![(v(0), v(2)), (v(0), v(1)), (v(1), v(3))]);
    }

    #[test]
    fn iter_edges_enumerates_arcs_in_adjacency_order() {
        let g = DirectedGraph::with_edges(5, [(2, 3), (0, 3), (3, 4)]);
        let trial: Vec<_> = g.iter_edges().collect();
        let oracle = vec![
            Edge::new(v(0), v(3)),
            Edge::new(v(2), v(3)),
            Edge::new(v(3), v(4)),
        ];
        assert_eq!(trial, oracle);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_vertex_panics() {
        let mut g = UndirectedGraph::new(3);
        g.connect(v(0), v(3));
    }

    #[test]
    #[should_panic]
    fn empty_graph_panics() {
        let _ = DirectedGraph::new(0);
    }

    #[test]
    fn debug_names_the_orientation() {
        let g = DirectedGraph::with_edges(2, [(1, 0)]);
        let trial = format!("{:?}", g);
        assert_eq!(
            trial,
            "DirectedGraph {\nVertexId(0)\nVertexId(1)\n  -> VertexId(0)\n}\n"
        );
    }

    fn adjacency_agrees_with_matrix<O: Orientation>(g: &Graph<O>) -> bool {
        for a in g.iter_vertices() {
            for b in g.iter_vertices() {
                let listed = g.neighbors(&a).contains(&b);
                if listed != g.contains_edge(&a, &b) {
                    return false;
                }
                if !O::DIRECTED && listed != g.neighbors(&b).contains(&a) {
                    return false;
                }
            }
        }
        true
    }

    #[quickcheck]
    fn undirected_representations_agree(ops: Ops) -> bool {
        let g: UndirectedGraph = (&ops).into();
        adjacency_agrees_with_matrix(&g)
    }

    #[quickcheck]
    fn directed_representations_agree(ops: Ops) -> bool {
        let g: DirectedGraph = (&ops).into();
        adjacency_agrees_with_matrix(&g)
    }

    #[quickcheck]
    fn connect_then_disconnect_restores(ops: Ops, a: usize, b: usize) -> bool {
        let g: UndirectedGraph = (&ops).into();
        let a = v(a % g.vertex_size());
        let b = v(b % g.vertex_size());
        if g.contains_edge(&a, &b) {
            return true;
        }
        let mut trial = g.clone();
        trial.connect(a, b);
        trial.disconnect(a, b);
        trial == g
    }

    #[quickcheck]
    fn edge_size_matches_enumeration(ops: Ops) -> bool {
        let u: UndirectedGraph = (&ops).into();
        let d: DirectedGraph = (&ops).into();
        u.edge_size() == u.iter_edges().count() && d.edge_size() == d.iter_edges().count()
    }
}
