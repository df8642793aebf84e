use crate::graph::*;

/// Inspects a graph's adjacency lists with customized indentation.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", v)?;
            for u in self.graph.neighbors(&v) {
                self.display_indent(f, 1)?;
                writeln!(f, "-> {:?}", u)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn indented_adjacency() {
        let mut g = UndirectedGraph::new(3);
        g.connect(VertexId::new(0), VertexId::new(2));
        let trial = format!("{:?}", g.debug().indent(1, 3));
        let oracle = " VertexId(0)\n    -> VertexId(2)\n VertexId(1)\n VertexId(2)\n    -> VertexId(0)\n";
        assert_eq!(trial, oracle);
    }
}
