//! The exercise algorithms.
//!
//! [`separation`] walks the adjacency list container; the others work on dense
//! matrices and grids.

pub use arbitrage::has_arbitrage;
pub use scc::{
    classify, component_sizes, reachability, strongly_connected_components, Locality,
};
pub use separation::separation;
pub use water::{trapped_water, HeightMap, RaggedRow};

mod arbitrage;
mod scc;
mod separation;
mod water;
