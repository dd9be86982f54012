//! One runner per exercise: read the input file, build the structure, run the algorithm.

use crate::{
    algo::{self, Locality},
    graph::{AdjacencyListGraph, Graph},
    input::{self, error::Result},
    matrix::{Labels, Matrix},
    types::Name,
};
use derive_more::Display;
use log::info;
use std::{fs, path::Path};

/// The hop count between two people, `-1` when they are not connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separation(pub Option<usize>);

impl std::fmt::Display for Separation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(hops) => write!(f, "{}", hops),
            None => write!(f, "-1"),
        }
    }
}

/// The localities of each class in the street graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deliveries {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl Deliveries {
    pub fn total(&self) -> u64 {
        [
            (Locality::Small, self.small),
            (Locality::Medium, self.medium),
            (Locality::Large, self.large),
        ]
        .iter()
        .map(|&(locality, count)| locality.deliveries() * count as u64)
        .sum()
    }
}

impl std::fmt::Display for Deliveries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.total())
    }
}

/// Whether the exchange rates admit a profitable cycle.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Arbitrage {
    #[display(fmt = "DINERO FACIL DESDE TU CASA")]
    Opportunity,
    #[display(fmt = "TODO GUAY DEL PARAGUAY")]
    Balanced,
}

/// The volume of water a flooded city holds.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub struct Flooding(pub u64);

/// Build the acquaintance graph, each pair linked both ways.
pub fn acquaintances(pairs: &[(Name, Name)]) -> AdjacencyListGraph<Name> {
    let mut graph = AdjacencyListGraph::new();
    for (a, b) in pairs {
        graph.add_vertex(a.clone());
        graph.add_vertex(b.clone());
        graph.connect(a, b);
        graph.connect(b, a);
    }
    graph
}

pub fn separation<P: AsRef<Path>>(path: P, src: &str, dst: &str) -> Result<Separation> {
    let pairs = input::parse_pairs(&fs::read_to_string(path)?)?;
    let graph = acquaintances(&pairs);
    info!(
        "{} people, {} acquaintances",
        graph.size(),
        graph.edge_count() / 2
    );
    Ok(Separation(algo::separation(
        &graph,
        &src.to_owned(),
        &dst.to_owned(),
    )))
}

pub fn deliveries<P: AsRef<Path>>(path: P) -> Result<Deliveries> {
    let streets = input::parse_streets(&fs::read_to_string(path)?)?;
    let mut labels = Labels::from_pairs(streets.iter().map(|(a, b)| (a.as_str(), b.as_str())));
    let mut adjacency = Matrix::new(labels.len());
    for (a, b) in &streets {
        adjacency[(labels.insert(a), labels.insert(b))] = true;
    }
    info!("{} places, {} streets", labels.len(), streets.len());
    let classes = algo::classify(&adjacency);
    for (locality, count) in &classes {
        info!("{} {} localities", count, locality);
    }
    let count = |locality| classes.get(&locality).copied().unwrap_or(0);
    Ok(Deliveries {
        small: count(Locality::Small),
        medium: count(Locality::Medium),
        large: count(Locality::Large),
    })
}

pub fn arbitrage<P: AsRef<Path>>(path: P) -> Result<Arbitrage> {
    let rates = input::parse_rates(&fs::read_to_string(path)?)?;
    let mut labels = Labels::from_pairs(rates.iter().map(|(a, b, _)| (a.as_str(), b.as_str())));
    let mut matrix = Matrix::new(labels.len());
    for (a, b, rate) in &rates {
        matrix[(labels.insert(a), labels.insert(b))] = *rate;
    }
    info!("{} currencies, {} rates", labels.len(), rates.len());
    Ok(if algo::has_arbitrage(&matrix) {
        Arbitrage::Opportunity
    } else {
        Arbitrage::Balanced
    })
}

pub fn flooding<P: AsRef<Path>>(path: P) -> Result<Flooding> {
    let map = input::parse_grid(&fs::read_to_string(path)?)?;
    info!("{}x{} city", map.rows(), map.columns());
    Ok(Flooding(algo::trapped_water(&map)))
}
