//! The directed graph container.

pub use adjacency_list::{AdjacencyListGraph, Edges, Vertices};

mod adjacency_list;

use crate::types::Vertex;

/// Operations every directed graph container supports.
///
/// Misuse (duplicate vertex, missing endpoint, self-loop, duplicate or absent edge)
/// is reported through the returned `bool` or `Option`, never by panicking.
pub trait Graph<V: Vertex> {
    /// Add `vertex` with no successors. Returns `false` if it is already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Add the arc `from -> to`.
    fn connect(&mut self, from: &V, to: &V) -> bool;

    /// Remove the arc `from -> to`.
    fn disconnect(&mut self, from: &V, to: &V) -> bool;

    fn contains(&self, vertex: &V) -> bool;

    /// The successors of `from`, in insertion order.
    fn outward_edges(&self, from: &V) -> Option<&[V]>;

    /// The vertices with an arc towards `to`.
    fn inward_edges(&self, to: &V) -> Option<Vec<V>>;

    /// Successors followed by predecessors. A vertex joined by arcs in both
    /// directions appears twice.
    fn connected_vertices(&self, vertex: &V) -> Option<Vec<V>> {
        let mut connected = self.outward_edges(vertex)?.to_vec();
        connected.extend(self.inward_edges(vertex)?);
        Some(connected)
    }

    fn all_vertices(&self) -> Vec<V>;

    /// Remove `vertex` together with every arc pointing to it.
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// The number of vertices.
    fn size(&self) -> usize;
}
