//! Path search configuration.

use std::fmt;
use std::sync::Arc;

use super::shortest::{Path, astar, zero_heuristic};
use crate::domain::{Minutes, NetworkError, Stop};
use crate::graph::Graph;

/// Estimate of remaining travel time from a stop to a target.
pub type HeuristicFn = dyn Fn(&Stop, &Stop) -> Minutes + Send + Sync;

/// Configuration for shortest-path queries.
///
/// The heuristic defaults to the zero function, which makes every query
/// behave exactly like Dijkstra.
#[derive(Clone)]
pub struct PathConfig {
    heuristic: Arc<HeuristicFn>,
    has_custom_heuristic: bool,
}

impl PathConfig {
    /// Create a configuration using the given heuristic.
    pub fn new<H>(heuristic: H) -> Self
    where
        H: Fn(&Stop, &Stop) -> Minutes + Send + Sync + 'static,
    {
        Self {
            heuristic: Arc::new(heuristic),
            has_custom_heuristic: true,
        }
    }

    /// Whether a non-default heuristic was supplied.
    pub fn has_custom_heuristic(&self) -> bool {
        self.has_custom_heuristic
    }

    /// Estimate for a single stop.
    pub fn estimate(&self, stop: &Stop, target: &Stop) -> Minutes {
        (self.heuristic)(stop, target)
    }

    /// Run A* with this configuration's heuristic.
    pub fn shortest_path(
        &self,
        graph: &Graph,
        source: &str,
        target: &str,
    ) -> Result<Path, NetworkError> {
        astar(graph, source, target, |stop, goal| self.estimate(stop, goal))
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            heuristic: Arc::new(zero_heuristic),
            has_custom_heuristic: false,
        }
    }
}

impl fmt::Debug for PathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathConfig")
            .field("has_custom_heuristic", &self.has_custom_heuristic)
            .finish_non_exhaustive()
    }
}
