use crate::{graph::Graph, types::Vertex};
use log::debug;
use std::collections::HashSet;

/// The number of hops between `src` and `dst`, ignoring arc direction.
///
/// Returns `None` if either vertex is missing or `dst` cannot be reached.
pub fn separation<V, G>(graph: &G, src: &V, dst: &V) -> Option<usize>
where
    V: Vertex,
    G: Graph<V>,
{
    if !graph.contains(src) || !graph.contains(dst) {
        return None;
    }
    if src == dst {
        return Some(0);
    }
    let mut visited: HashSet<V> = HashSet::new();
    visited.insert(src.clone());
    let mut frontier = vec![src.clone()];
    let mut depth = 1;
    while !frontier.is_empty() {
        debug!("level {}: {} vertices", depth, frontier.len());
        let mut next = Vec::new();
        for vertex in &frontier {
            for neighbor in graph.connected_vertices(vertex).unwrap_or_default() {
                if visited.contains(&neighbor) {
                    continue;
                }
                if &neighbor == dst {
                    return Some(depth);
                }
                visited.insert(neighbor.clone());
                next.push(neighbor);
            }
        }
        frontier = next;
        depth += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    fn create_path() -> AdjacencyListGraph<&'static str> {
        let mut g = AdjacencyListGraph::new();
        for v in &["X", "Y", "Z", "W"] {
            g.add_vertex(*v);
        }
        for (u, v) in &[("X", "Y"), ("Y", "Z")] {
            g.connect(u, v);
            g.connect(v, u);
        }
        g
    }

    #[test]
    fn test_separation() {
        let g = create_path();
        assert_eq!(separation(&g, &"X", &"Z"), Some(2));
        assert_eq!(separation(&g, &"Z", &"X"), Some(2));
        assert_eq!(separation(&g, &"X", &"Y"), Some(1));
        assert_eq!(separation(&g, &"X", &"X"), Some(0));
    }

    #[test]
    fn test_unreachable() {
        let g = create_path();
        assert_eq!(separation(&g, &"X", &"W"), None);
        assert_eq!(separation(&g, &"X", &"Q"), None);
        assert_eq!(separation(&g, &"Q", &"Q"), None);
    }

    #[test]
    fn test_ignores_direction() {
        let mut g = AdjacencyListGraph::new();
        for v in 0..4 {
            g.add_vertex(v);
        }
        g.connect(&1, &0);
        g.connect(&1, &2);
        g.connect(&3, &2);
        assert_eq!(separation(&g, &0, &3), Some(3));
    }
}
