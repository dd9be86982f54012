use super::Graph;
use crate::types::Vertex;
use std::collections::{hash_map, HashMap, HashSet};

/// An iterator over the vertices of an adjacency list graph.
pub struct Vertices<'a, V> {
    vertices: hash_map::Keys<'a, V, Vec<V>>,
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.vertices.next()
    }
}

/// An iterator over the arcs of an adjacency list graph.
pub struct Edges<'a, V> {
    vertices: hash_map::Iter<'a, V, Vec<V>>,
    current: Option<(&'a V, std::slice::Iter<'a, V>)>,
}

impl<'a, V> Iterator for Edges<'a, V> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, successors)) = &mut self.current {
                if let Some(to) = successors.next() {
                    return Some((*from, to));
                }
            }
            let (from, successors) = self.vertices.next()?;
            self.current = Some((from, successors.iter()));
        }
    }
}

/// A directed graph stored as a map from each vertex to its successor list.
///
/// Arcs can only join two distinct vertices already in the graph, and each arc
/// is stored once. Successors keep their insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyListGraph<V: Vertex> {
    successors: HashMap<V, Vec<V>>,
}

impl<V: Vertex> AdjacencyListGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            successors: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.successors
            .get(from)
            .map_or(false, |successors| successors.contains(to))
    }

    pub fn vertices(&self) -> Vertices<V> {
        Vertices {
            vertices: self.successors.keys(),
        }
    }

    pub fn edges(&self) -> Edges<V> {
        Edges {
            vertices: self.successors.iter(),
            current: None,
        }
    }

    /// Extract the subgraph induced by the given vertices.
    ///
    /// Vertices unknown to this graph are skipped. The result shares nothing
    /// with `self`.
    pub fn subgraph<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let kept: HashSet<V> = vertices
            .into_iter()
            .filter(|vertex| self.successors.contains_key(vertex))
            .collect();
        let successors = kept
            .iter()
            .map(|vertex| {
                let successors = self.successors[vertex]
                    .iter()
                    .filter(|to| kept.contains(to))
                    .cloned()
                    .collect();
                (vertex.clone(), successors)
            })
            .collect();
        Self { successors }
    }
}

impl<V: Vertex> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for AdjacencyListGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> bool {
        match self.successors.entry(vertex) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    fn connect(&mut self, from: &V, to: &V) -> bool {
        if from == to || !self.successors.contains_key(to) {
            return false;
        }
        match self.successors.get_mut(from) {
            Some(successors) if !successors.contains(to) => {
                successors.push(to.clone());
                true
            }
            _ => false,
        }
    }

    fn disconnect(&mut self, from: &V, to: &V) -> bool {
        if from == to || !self.successors.contains_key(to) {
            return false;
        }
        match self.successors.get_mut(from) {
            Some(successors) => match successors.iter().position(|v| v == to) {
                Some(i) => {
                    successors.remove(i);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    fn contains(&self, vertex: &V) -> bool {
        self.successors.contains_key(vertex)
    }

    fn outward_edges(&self, from: &V) -> Option<&[V]> {
        self.successors.get(from).map(Vec::as_slice)
    }

    fn inward_edges(&self, to: &V) -> Option<Vec<V>> {
        if !self.contains(to) {
            return None;
        }
        Some(
            self.successors
                .iter()
                .filter(|(_, successors)| successors.contains(to))
                .map(|(from, _)| from.clone())
                .collect(),
        )
    }

    fn all_vertices(&self) -> Vec<V> {
        self.vertices().cloned().collect()
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.successors.remove(vertex).is_none() {
            return false;
        }
        for successors in self.successors.values_mut() {
            successors.retain(|v| v != vertex);
        }
        true
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<V: Vertex + std::fmt::Debug> std::fmt::Debug for AdjacencyListGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.successors.iter()).finish()
    }
}
