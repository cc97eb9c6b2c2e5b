//! Breadth-first traversal.
//!
//! Walks the graph outward from a source by hop count, ignoring weights.
//! Edges are yielded lazily in the order their child stop is discovered.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::{NetworkError, Stop};
use crate::graph::{Graph, StopIndex};

/// Lazy iterator over `(parent, child)` discovery edges.
///
/// Every stop reachable from the source (other than the source itself)
/// appears exactly once as a child. Unreachable stops never appear.
pub struct BfsEdges<'g> {
    graph: &'g Graph,
    queue: VecDeque<StopIndex>,
    visited: Vec<bool>,
    /// Stop whose successors are being scanned, and the next position to scan.
    scanning: Option<(StopIndex, usize)>,
    discovered: usize,
}

impl<'g> BfsEdges<'g> {
    fn new(graph: &'g Graph, source: StopIndex) -> Self {
        let mut visited = vec![false; graph.stop_count()];
        visited[source] = true;

        Self {
            graph,
            queue: VecDeque::from([source]),
            visited,
            scanning: None,
            discovered: 0,
        }
    }
}

impl<'g> Iterator for BfsEdges<'g> {
    type Item = (&'g Stop, &'g Stop);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((parent, pos)) = self.scanning else {
                match self.queue.pop_front() {
                    Some(next) => {
                        self.scanning = Some((next, 0));
                        continue;
                    }
                    None => {
                        debug!(discovered = self.discovered, "BFS complete");
                        return None;
                    }
                }
            };

            let successors = self.graph.successors(parent);
            let Some(&(child, _)) = successors.get(pos) else {
                self.scanning = None;
                continue;
            };
            self.scanning = Some((parent, pos + 1));

            if self.visited[child] {
                continue;
            }

            self.visited[child] = true;
            self.queue.push_back(child);
            self.discovered += 1;
            return Some((self.graph.stop_at(parent), self.graph.stop_at(child)));
        }
    }
}

/// Breadth-first discovery edges from `source`.
pub fn bfs_edges<'g>(graph: &'g Graph, source: &str) -> Result<BfsEdges<'g>, NetworkError> {
    let source_idx = graph.index_of(source)?;
    Ok(BfsEdges::new(graph, source_idx))
}

/// Hop count from `source` to every reachable stop, in discovery order.
///
/// The source itself is listed first at distance 0.
pub fn hop_distances<'g>(
    graph: &'g Graph,
    source: &str,
) -> Result<Vec<(&'g Stop, usize)>, NetworkError> {
    let source_stop = graph.stop(source)?;
    let mut depths: Vec<(&Stop, usize)> = vec![(source_stop, 0)];

    for (parent, child) in bfs_edges(graph, source)? {
        let parent_depth = depths
            .iter()
            .find(|(stop, _)| *stop == parent)
            .map(|&(_, depth)| depth)
            .unwrap_or(0);
        depths.push((child, parent_depth + 1));
    }

    Ok(depths)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    const STOPS: usize = 10;

    fn name(i: usize) -> String {
        format!("S{i}")
    }

    fn graph_strategy() -> impl Strategy<Value = Graph> {
        prop::collection::vec((0..STOPS, 0..STOPS), 0..30).prop_map(|edges| {
            let mut g = Graph::new();
            for i in 0..STOPS {
                g.add_stop(Stop::parse(&name(i)).unwrap());
            }
            for (from, to) in edges {
                g.add_edge(
                    Stop::parse(&name(from)).unwrap(),
                    Stop::parse(&name(to)).unwrap(),
                    1,
                );
            }
            g
        })
    }

    /// Reachable set by plain depth-first flood fill.
    fn reachable(g: &Graph, source: &str) -> HashSet<String> {
        let mut seen = HashSet::from([source.to_string()]);
        let mut stack = vec![source.to_string()];
        while let Some(stop) = stack.pop() {
            for (next, _) in g.neighbors(&stop).unwrap() {
                if seen.insert(next.as_str().to_string()) {
                    stack.push(next.as_str().to_string());
                }
            }
        }
        seen
    }

    proptest! {
        /// Each reachable stop is discovered exactly once, and nothing else is
        #[test]
        fn visits_reachable_exactly_once(g in graph_strategy(), s in 0..STOPS) {
            let source = name(s);
            let children: Vec<String> = bfs_edges(&g, &source)
                .unwrap()
                .map(|(_, c)| c.as_str().to_string())
                .collect();

            let unique: HashSet<String> = children.iter().cloned().collect();
            prop_assert_eq!(unique.len(), children.len());
            prop_assert!(!unique.contains(&source));

            let mut expected = reachable(&g, &source);
            expected.remove(&source);
            prop_assert_eq!(unique, expected);
        }

        /// Discovery order never moves to a shallower depth
        #[test]
        fn depth_non_decreasing(g in graph_strategy(), s in 0..STOPS) {
            let source = name(s);
            let depths = hop_distances(&g, &source).unwrap();

            for pair in depths.windows(2) {
                prop_assert!(pair[0].1 <= pair[1].1);
            }
        }

        /// Every yielded pair is an edge whose parent was discovered earlier
        #[test]
        fn parents_precede_children(g in graph_strategy(), s in 0..STOPS) {
            let source = name(s);
            let mut order: HashMap<String, usize> = HashMap::from([(source.clone(), 0)]);

            for (i, (parent, child)) in bfs_edges(&g, &source).unwrap().enumerate() {
                prop_assert!(g.edge_weight(parent.as_str(), child.as_str()).is_ok());
                prop_assert!(order.contains_key(parent.as_str()));
                order.insert(child.as_str().to_string(), i + 1);
            }
        }
    }
}
