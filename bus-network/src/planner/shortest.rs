//! Shortest-path search (Dijkstra and A*).
//!
//! Both algorithms share one best-first search. Frontier entries are ranked
//! by distance-so-far plus a heuristic estimate of the distance remaining;
//! Dijkstra is simply A* with an estimate of zero everywhere.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{Minutes, NetworkError, Stop};
use crate::graph::{Graph, StopIndex};

/// A path through the graph with its summed travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    /// Stops from source to target inclusive.
    pub stops: Vec<Stop>,

    /// Sum of edge weights along the path, in minutes.
    pub total: u64,
}

impl Path {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&Stop> {
        self.stops.first()
    }

    pub fn target(&self) -> Option<&Stop> {
        self.stops.last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.stops.iter().map(Stop::as_str).collect();
        write!(f, "{} ({} min)", names.join(" -> "), self.total)
    }
}

/// The zero heuristic. With it, A* explores exactly like Dijkstra.
pub fn zero_heuristic(_stop: &Stop, _target: &Stop) -> Minutes {
    0
}

/// Cheapest path from `source` to `target` by summed edge weight.
pub fn dijkstra(graph: &Graph, source: &str, target: &str) -> Result<Path, NetworkError> {
    astar(graph, source, target, zero_heuristic)
}

/// Cheapest path from `source` to `target`, guided by `heuristic`.
///
/// `heuristic(stop, target)` estimates the remaining travel time. The
/// result is optimal whenever the estimate never exceeds the true remaining
/// cost.
pub fn astar<H>(
    graph: &Graph,
    source: &str,
    target: &str,
    heuristic: H,
) -> Result<Path, NetworkError>
where
    H: Fn(&Stop, &Stop) -> Minutes,
{
    let source_idx = graph.index_of(source)?;
    let target_idx = graph.index_of(target)?;
    let target_stop = graph.stop_at(target_idx);

    let n = graph.stop_count();
    let mut best: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<StopIndex>> = vec![None; n];
    let mut frontier = BinaryHeap::new();
    let mut sequence: u64 = 0;
    let mut expanded = 0usize;

    let estimate = |idx: StopIndex| u64::from(heuristic(graph.stop_at(idx), target_stop));

    best[source_idx] = Some(0);
    frontier.push(FrontierEntry {
        priority: estimate(source_idx),
        sequence,
        distance: 0,
        stop: source_idx,
    });

    while let Some(entry) = frontier.pop() {
        // Stale entry: a shorter route to this stop was queued later
        if best[entry.stop].is_some_and(|d| entry.distance > d) {
            continue;
        }

        expanded += 1;
        trace!(
            stop = %graph.stop_at(entry.stop),
            distance = entry.distance,
            priority = entry.priority,
            "Expanding stop"
        );

        if entry.stop == target_idx {
            debug!(
                source,
                target,
                total = entry.distance,
                expanded,
                "Shortest path found"
            );
            return Ok(Path {
                stops: reconstruct(graph, &parent, target_idx),
                total: entry.distance,
            });
        }

        for &(next, weight) in graph.successors(entry.stop) {
            let distance = entry.distance + u64::from(weight);
            if best[next].is_some_and(|d| d <= distance) {
                continue;
            }

            best[next] = Some(distance);
            parent[next] = Some(entry.stop);
            sequence += 1;
            frontier.push(FrontierEntry {
                priority: distance + estimate(next),
                sequence,
                distance,
                stop: next,
            });
        }
    }

    debug!(source, target, expanded, "Frontier exhausted without reaching target");

    Err(NetworkError::NoPathFound {
        from: graph.stop_at(source_idx).clone(),
        to: target_stop.clone(),
    })
}

/// Walk parent links back from the target.
fn reconstruct(graph: &Graph, parent: &[Option<StopIndex>], target: StopIndex) -> Vec<Stop> {
    let mut stops = vec![graph.stop_at(target).clone()];
    let mut current = target;

    while let Some(prev) = parent[current] {
        stops.push(graph.stop_at(prev).clone());
        current = prev;
    }

    stops.reverse();
    stops
}

/// Frontier entry ordered so that `BinaryHeap` pops the lowest priority
/// first, then the earliest queued.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    priority: u64,
    sequence: u64,
    distance: u64,
    stop: StopIndex,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
