//! Various types shared by the graph container and the exercises.

use std::hash::Hash;

/// Anything usable as a vertex label.
pub trait Vertex: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Vertex for T {}

/// The vertex label type of the exercises.
pub type Name = String;

/// The dense index of a label in a [`Matrix`](crate::matrix::Matrix).
pub type Index = usize;

/// The height of a cell in a height map.
pub type Height = i32;
