//! Prüfer sequences: the bijection between labeled trees on `n` vertices
//! and sequences of `n - 2` labels from `0..n`.
//!
//! ```rust
//! use cayleygraph::{graph::*, prufer::*};
//!
//! let seq = PruferSequence::from_raw(&[4, 0, 0, 4]);
//! let tree = seq.decode().unwrap();
//! assert_eq!(tree.vertex_size(), 6);
//! assert_eq!(prufer_encode(&tree).unwrap(), seq);
//! ```
use crate::{algorithm::Connectivity, graph::*};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::debug;
use std::{cmp::Reverse, collections::BinaryHeap};
use thiserror::Error;

/// Violated preconditions of the Prüfer codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PruferError {
    /// The sequence does not have `n - 2` labels.
    #[error("A Prüfer sequence for {vertex_size} vertices has {expected} labels, got {got}")]
    LengthMismatch {
        vertex_size: usize,
        expected: usize,
        got: usize,
    },

    /// A label is not a vertex of the tree.
    #[error("Label {label} is out of range 0..{vertex_size}")]
    LabelOutOfRange { label: VertexId, vertex_size: usize },

    /// The graph to encode is not a tree.
    #[error("Only trees have Prüfer sequences")]
    NotATree,

    /// Prüfer sequences need at least two vertices.
    #[error("Prüfer sequences need at least 2 vertices, got {0}")]
    TooFewVertices(usize),
}

pub type PruferResult<T> = Result<T, PruferError>;

/// An immutable sequence of vertex labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PruferSequence(Box<[VertexId]>);

impl PruferSequence {
    pub fn new(labels: Vec<VertexId>) -> Self {
        Self(labels.into_boxed_slice())
    }

    pub fn from_raw(labels: &[usize]) -> Self {
        labels.iter().copied().map(VertexId::new).collect()
    }

    pub fn as_slice(&self) -> &[VertexId] {
        &self.0
    }

    /// Vertices of the tree this sequence encodes.
    pub fn vertex_size(&self) -> usize {
        self.0.len() + 2
    }

    pub fn decode(&self) -> PruferResult<UndirectedGraph> {
        prufer_decode(&self.0)
    }
}

impl std::ops::Deref for PruferSequence {
    type Target = [VertexId];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<VertexId>> for PruferSequence {
    fn from(labels: Vec<VertexId>) -> Self {
        Self::new(labels)
    }
}

impl FromIterator<VertexId> for PruferSequence {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Written as a tuple, e.g. `(4, 0, 0, 4)`.
impl std::fmt::Display for PruferSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/// Decodes a sequence into the tree on `sequence.len() + 2` vertices.
pub fn prufer_decode(sequence: &[VertexId]) -> PruferResult<UndirectedGraph> {
    prufer_decode_with_vertex_size(sequence.len() + 2, sequence)
}

/// Decodes a sequence into a tree on `vertex_size` vertices.
///
/// At each step the smallest vertex that is neither removed nor mentioned
/// in the rest of the sequence becomes a leaf of the current label.
/// The last two vertices are connected to each other.
pub fn prufer_decode_with_vertex_size(
    vertex_size: usize,
    sequence: &[VertexId],
) -> PruferResult<UndirectedGraph> {
    if vertex_size < 2 {
        return Err(PruferError::TooFewVertices(vertex_size));
    }
    if sequence.len() != vertex_size - 2 {
        return Err(PruferError::LengthMismatch {
            vertex_size,
            expected: vertex_size - 2,
            got: sequence.len(),
        });
    }
    // a vertex's degree in the final tree
    let mut degree = vec![1usize; vertex_size];
    for label in sequence {
        if label.to_raw() >= vertex_size {
            return Err(PruferError::LabelOutOfRange {
                label: *label,
                vertex_size,
            });
        }
        degree[label.to_raw()] += 1;
    }
    let mut leaves: BinaryHeap<Reverse<VertexId>> = (0..vertex_size)
        .filter(|i| degree[*i] == 1)
        .map(|i| Reverse(VertexId::new(i)))
        .collect();
    let mut tree = UndirectedGraph::new(vertex_size);
    for label in sequence {
        let leaf = match leaves.pop() {
            Some(Reverse(leaf)) => leaf,
            None => unreachable!("a forest always has a leaf"),
        };
        tree.connect(leaf, *label);
        degree[label.to_raw()] -= 1;
        if degree[label.to_raw()] == 1 {
            leaves.push(Reverse(*label));
        }
    }
    match (leaves.pop(), leaves.pop()) {
        (Some(Reverse(a)), Some(Reverse(b))) => tree.connect(a, b),
        _ => unreachable!("two vertices remain"),
    }
    debug!(
        "decoded {} labels into a tree on {} vertices",
        sequence.len(),
        vertex_size
    );
    Ok(tree)
}

/// Encodes a tree.
///
/// Repeatedly removes the smallest leaf and records its neighbor, `n - 2` times.
/// Works on a copy; `tree` is left untouched.
pub fn prufer_encode(tree: &UndirectedGraph) -> PruferResult<PruferSequence> {
    let vertex_size = tree.vertex_size();
    if vertex_size < 2 {
        return Err(PruferError::TooFewVertices(vertex_size));
    }
    if !tree.is_tree() {
        return Err(PruferError::NotATree);
    }
    let mut working = tree.clone();
    let mut degree_queue = KeyedPriorityQueue::with_capacity_and_hasher(
        vertex_size,
        RandomState::new(),
    );
    for v in working.iter_vertices() {
        degree_queue.push(v, Reverse((working.degree(&v), v)));
    }
    let mut res = Vec::with_capacity(vertex_size - 2);
    for _ in 0..vertex_size - 2 {
        let (leaf, _) = degree_queue.pop().ok_or(PruferError::NotATree)?;
        let neighbor = working
            .neighbors(&leaf)
            .first()
            .copied()
            .ok_or(PruferError::NotATree)?;
        res.push(neighbor);
        working.disconnect(leaf, neighbor);
        let degree = working.degree(&neighbor);
        degree_queue
            .set_priority(&neighbor, Reverse((degree, neighbor)))
            .map_err(|_| PruferError::NotATree)?;
    }
    debug!("encoded a tree on {} vertices", vertex_size);
    Ok(PruferSequence::new(res))
}
