//! A directed graph container and the classic graph exercises built on it.

pub mod algo;
pub mod graph;
pub mod input;
pub mod matrix;
pub mod task;
pub mod types;
