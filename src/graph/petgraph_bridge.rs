use crate::graph::*;
use petgraph::graph::NodeIndex;

impl<O: Orientation> Graph<O> {
    /// Copies the graph into a petgraph graph, e.g. to hand it to a renderer.
    ///
    /// Node `i` of the result carries `VertexId(i)`.
    pub fn to_petgraph(&self) -> petgraph::Graph<VertexId, (), O::PetgraphType, usize> {
        let mut res = petgraph::Graph::with_capacity(self.vertex_size(), self.edge_size());
        for v in self.iter_vertices() {
            res.add_node(v);
        }
        for e in self.iter_edges() {
            res.add_edge(
                NodeIndex::new(e.source.to_raw()),
                NodeIndex::new(e.sink.to_raw()),
                (),
            );
        }
        res
    }
}
