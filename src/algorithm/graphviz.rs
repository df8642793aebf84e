//! Dump graphs in the graphviz format.
use crate::graph::*;

/**
 * Dumps a directed/undirected graph into graphviz format.
 *
 * Every vertex is listed, isolated ones included,
 * followed by the edges in enumeration order.
 *
 * # Examples
 *
 * ```rust
 * use cayleygraph::{algorithm::graphviz::*, graph::*};
 *
 * let dg = DirectedGraph::with_edges(3, [(0, 1), (2, 2)]);
 * let trial = {
 *     let mut buf = vec![];
 *     dg.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph trial {
 *   0 ;
 *   1 ;
 *   2 ;
 *   0 -> 1 ;
 *   2 -> 2 ;
 * }
 * "#);
 *
 * let udg = UndirectedGraph::with_edges(3, [(1, 0)]);
 * let trial = {
 *     let mut buf = vec![];
 *     udg.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   0 ;
 *   1 ;
 *   2 ;
 *   0 -- 1 ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: QueryableGraph + DirectedOrNot,
{
    /**
     * Dumps a directed/undirected graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        if Self::DIRECTED_OR_NOT {
            writeln!(out, "digraph {} {{", graph_name)?;
        } else {
            writeln!(out, "graph {} {{", graph_name)?;
        }
        for v in self.iter_vertices() {
            writeln!(out, "  {} ;", v)?;
        }
        let dir = if Self::DIRECTED_OR_NOT { "->" } else { "--" };
        for e in self.iter_edges() {
            writeln!(out, "  {} {} {} ;", e.source, dir, e.sink)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpInGraphviz for G where G: QueryableGraph + DirectedOrNot {}
