//! Strongly connected components through the reachability closure.

use crate::{matrix::Matrix, types::Index};
use derive_more::Display;
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;

/// All-pairs reachability (Roy-Warshall).
///
/// Every vertex reaches itself.
pub fn reachability(adjacency: &Matrix<bool>) -> Matrix<bool> {
    let n = adjacency.order();
    let mut reach = adjacency.clone();
    for i in 0..n {
        reach[(i, i)] = true;
    }
    for k in 0..n {
        for i in 0..n {
            if i != k && reach[(i, k)] {
                reach.merge_row(i, k, |a, b| *a || *b);
            }
        }
    }
    reach
}

/// Label every vertex with the smallest index of its strongly connected component.
pub fn strongly_connected_components(adjacency: &Matrix<bool>) -> Vec<Index> {
    let reach = reachability(adjacency);
    let n = adjacency.order();
    let mut components: Vec<Option<Index>> = vec![None; n];
    for v in 0..n {
        if components[v].is_some() {
            continue;
        }
        for w in v..n {
            if reach[(v, w)] && reach[(w, v)] {
                components[w] = Some(v);
            }
        }
    }
    components.into_iter().flatten().collect()
}

/// The number of members of each component, keyed by label.
pub fn component_sizes(components: &[Index]) -> HashMap<Index, usize> {
    components.iter().copied().counts()
}

/// The size class of a component of the street graph.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locality {
    #[display(fmt = "small")]
    Small,
    #[display(fmt = "medium")]
    Medium,
    #[display(fmt = "large")]
    Large,
}

impl Locality {
    pub fn of_size(size: usize) -> Self {
        match size {
            0..=2 => Locality::Small,
            3..=5 => Locality::Medium,
            _ => Locality::Large,
        }
    }

    /// The deliveries a locality of this class needs.
    pub fn deliveries(self) -> u64 {
        match self {
            Locality::Small => 10,
            Locality::Medium => 20,
            Locality::Large => 30,
        }
    }
}

/// Count the localities of each class.
pub fn classify(adjacency: &Matrix<bool>) -> HashMap<Locality, usize> {
    let components = strongly_connected_components(adjacency);
    let sizes = component_sizes(&components);
    debug!("{} components over {} vertices", sizes.len(), components.len());
    sizes
        .values()
        .map(|&size| Locality::of_size(size))
        .counts()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_matrix(n: usize, arcs: &[(Index, Index)]) -> Matrix<bool> {
        let mut m = Matrix::new(n);
        for &(u, v) in arcs {
            m[(u, v)] = true;
        }
        m
    }

    #[test]
    fn test_reachability() {
        let reach = reachability(&create_matrix(4, &[(0, 1), (1, 2), (3, 0)]));
        assert_eq!(reach.row(0), &[true, true, true, false]);
        assert_eq!(reach.row(2), &[false, false, true, false]);
        assert_eq!(reach.row(3), &[true, true, true, true]);
    }

    #[test]
    fn test_components() {
        let m = create_matrix(6, &[(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (4, 5), (1, 2)]);
        assert_eq!(strongly_connected_components(&m), vec![0, 0, 2, 2, 2, 5]);
        let sizes = component_sizes(&strongly_connected_components(&m));
        assert_eq!(sizes.get(&0), Some(&2));
        assert_eq!(sizes.get(&2), Some(&3));
        assert_eq!(sizes.get(&5), Some(&1));
    }

    #[test]
    fn test_empty() {
        assert_eq!(strongly_connected_components(&Matrix::new(0)), vec![]);
        assert!(classify(&Matrix::new(0)).is_empty());
    }

    #[test]
    fn test_classify() {
        let cycle: Vec<_> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
        let mut arcs = cycle.clone();
        arcs.extend(cycle.iter().map(|&(u, v)| (u + 6, v + 6)));
        arcs.extend(vec![(12, 13), (13, 14), (14, 12), (15, 16)]);
        let classes = classify(&create_matrix(17, &arcs));
        assert_eq!(classes.get(&Locality::Large), Some(&2));
        assert_eq!(classes.get(&Locality::Medium), Some(&1));
        assert_eq!(classes.get(&Locality::Small), Some(&2));
    }

    #[test]
    fn test_locality() {
        assert_eq!(Locality::of_size(1), Locality::Small);
        assert_eq!(Locality::of_size(2), Locality::Small);
        assert_eq!(Locality::of_size(3), Locality::Medium);
        assert_eq!(Locality::of_size(5), Locality::Medium);
        assert_eq!(Locality::of_size(6), Locality::Large);
        assert_eq!(Locality::Medium.deliveries(), 20);
        assert_eq!(Locality::Small.to_string(), "small");
        assert_eq!(Locality::Large.to_string(), "large");
    }
}
