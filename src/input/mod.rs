//! Readers for the exercise input files.

pub use parser::{parse_grid, parse_pairs, parse_rates, parse_streets, InputRule};

pub mod error;

mod parser;
