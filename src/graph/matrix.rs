use crate::graph::*;
use bit_vec::BitVec;
use std::marker::PhantomData;

/// Boolean adjacency matrix shaped by the orientation.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct AdjacencyMatrix<O: Orientation> {
    vertex_size: usize,
    bits: BitVec,
    _orientation: PhantomData<O>,
}

impl<O: Orientation> AdjacencyMatrix<O> {
    pub(crate) fn new(vertex_size: usize) -> Self {
        Self {
            vertex_size,
            bits: BitVec::from_elem(O::matrix_len(vertex_size), false),
            _orientation: PhantomData,
        }
    }

    pub(crate) fn get(&self, a: &VertexId, b: &VertexId) -> bool {
        let cell = O::matrix_cell(self.vertex_size, a.to_raw(), b.to_raw());
        self.bits.get(cell).unwrap_or(false)
    }

    pub(crate) fn set(&mut self, a: &VertexId, b: &VertexId, present: bool) {
        let cell = O::matrix_cell(self.vertex_size, a.to_raw(), b.to_raw());
        self.bits.set(cell, present);
    }

    pub(crate) fn count_ones(&self) -> usize {
        self.bits.iter().filter(|x| *x).count()
    }
}
