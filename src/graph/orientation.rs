use petgraph::EdgeType;

/// Edge-mutation strategy of a [`Graph`](super::Graph).
///
/// The strategy decides whether connecting `a` to `b` also connects `b` to `a`,
/// and how the adjacency matrix is shaped.
pub trait Orientation: Clone + Copy + Eq + std::fmt::Debug + Default + 'static {
    const DIRECTED: bool;

    /// The matching petgraph edge type.
    type PetgraphType: EdgeType;

    /// Number of cells in the adjacency matrix of a graph with `n` vertices.
    fn matrix_len(n: usize) -> usize;

    /// Cell of the adjacency matrix recording the edge from `a` to `b`.
    fn matrix_cell(n: usize, a: usize, b: usize) -> usize;
}

/// Symmetric edges over a lower-triangular matrix (diagonal included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undirected;

/// Asymmetric edges over a full matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directed;

impl Orientation for Undirected {
    const DIRECTED: bool = false;
    type PetgraphType = petgraph::Undirected;

    fn matrix_len(n: usize) -> usize {
        n * (n + 1) / 2
    }

    fn matrix_cell(_: usize, a: usize, b: usize) -> usize {
        let (row, col) = if a >= b { (a, b) } else { (b, a) };
        row * (row + 1) / 2 + col
    }
}

impl Orientation for Directed {
    const DIRECTED: bool = true;
    type PetgraphType = petgraph::Directed;

    fn matrix_len(n: usize) -> usize {
        n * n
    }

    fn matrix_cell(n: usize, a: usize, b: usize) -> usize {
        a * n + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn triangular_cells_are_dense_and_symmetric() {
        let n = 5;
        let mut cells = BTreeSet::new();
        for a in 0..n {
            for b in 0..=a {
                assert_eq!(
                    Undirected::matrix_cell(n, a, b),
                    Undirected::matrix_cell(n, b, a)
                );
                cells.insert(Undirected::matrix_cell(n, a, b));
            }
        }
        let oracle: BTreeSet<_> = (0..Undirected::matrix_len(n)).collect();
        assert_eq!(cells, oracle);
    }

    #[test]
    fn full_cells_are_asymmetric() {
        assert_eq!(Directed::matrix_len(4), 16);
        assert_eq!(Directed::matrix_cell(4, 1, 2), 6);
        assert_eq!(Directed::matrix_cell(4, 2, 1), 9);
    }
}
