//! Directed weighted graph of stops.
//!
//! Stops and edges keep their insertion order. That order is what the
//! adjacency exports index by, and what neighbor enumeration (and therefore
//! BFS discovery and Dijkstra tie-breaking) follows.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Minutes, NetworkError, Stop};
use crate::network::NetworkConfig;

/// Index of a stop within a [`Graph`].
pub(crate) type StopIndex = usize;

/// The graph store: named stops joined by directed travel-time edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stops: Vec<Stop>,
    index: HashMap<Stop, StopIndex>,
    /// Outgoing edges per stop, in insertion order.
    adjacency: Vec<Vec<(StopIndex, Minutes)>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a network configuration.
    ///
    /// Declared stops are added first, in order, then every route. A route
    /// naming a stop that was not declared fails with `UnknownStop`.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        let mut graph = Self::new();

        for name in &config.stops {
            graph.add_stop(Stop::parse(name)?);
        }

        for route in &config.routes {
            let from = graph.stop(&route.from)?.clone();
            let to = graph.stop(&route.to)?.clone();
            graph.add_edge(from, to, route.minutes);
        }

        debug!(
            stops = graph.stop_count(),
            edges = graph.edge_count(),
            "Built graph from config"
        );

        Ok(graph)
    }

    /// Add a stop if it is not already present. Returns its index.
    pub fn add_stop(&mut self, stop: Stop) -> StopIndex {
        if let Some(&idx) = self.index.get(&stop) {
            return idx;
        }

        let idx = self.stops.len();
        self.index.insert(stop.clone(), idx);
        self.stops.push(stop);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Insert or overwrite the directed edge `from -> to`.
    ///
    /// Endpoints not yet in the graph are added as stops. Overwriting keeps
    /// the edge's original position among `from`'s neighbors.
    pub fn add_edge(&mut self, from: Stop, to: Stop, weight: Minutes) {
        let from_idx = self.add_stop(from);
        let to_idx = self.add_stop(to);

        let edges = &mut self.adjacency[from_idx];
        match edges.iter_mut().find(|(idx, _)| *idx == to_idx) {
            Some(existing) => existing.1 = weight,
            None => edges.push((to_idx, weight)),
        }
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Result<&Stop, NetworkError> {
        self.index_of(name).map(|idx| &self.stops[idx])
    }

    /// Returns true if a stop with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Stops directly reachable from `name`, with travel times.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&Stop, Minutes)>, NetworkError> {
        let idx = self.index_of(name)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(to, weight)| (&self.stops[to], weight))
            .collect())
    }

    /// Weight of the edge `from -> to`.
    ///
    /// Fails with `UnknownStop` if either stop is absent, or `EdgeNotFound`
    /// if both exist but are not joined.
    pub fn edge_weight(&self, from: &str, to: &str) -> Result<Minutes, NetworkError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        self.adjacency[from_idx]
            .iter()
            .find(|(idx, _)| *idx == to_idx)
            .map(|&(_, weight)| weight)
            .ok_or_else(|| NetworkError::EdgeNotFound {
                from: self.stops[from_idx].clone(),
                to: self.stops[to_idx].clone(),
            })
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All edges as `(from, to, weight)`, grouped by source in stop order.
    pub fn edges(&self) -> impl Iterator<Item = (&Stop, &Stop, Minutes)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(from, edges)| {
            edges
                .iter()
                .map(move |&(to, weight)| (&self.stops[from], &self.stops[to], weight))
        })
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub(crate) fn index_of(&self, name: &str) -> Result<StopIndex, NetworkError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStop(name.to_string()))
    }

    pub(crate) fn stop_at(&self, idx: StopIndex) -> &Stop {
        &self.stops[idx]
    }

    pub(crate) fn successors(&self, idx: StopIndex) -> &[(StopIndex, Minutes)] {
        &self.adjacency[idx]
    }
}

/// Builder for creating graphs.
///
/// Provides a fluent API for adding edges by name.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    inner: Graph,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop with no edges.
    pub fn stop(mut self, name: &str) -> Result<Self, NetworkError> {
        self.inner.add_stop(Stop::parse(name)?);
        Ok(self)
    }

    /// Add a directed edge.
    pub fn edge(mut self, from: &str, to: &str, weight: Minutes) -> Result<Self, NetworkError> {
        self.inner
            .add_edge(Stop::parse(from)?, Stop::parse(to)?, weight);
        Ok(self)
    }

    /// Build the graph.
    pub fn build(self) -> Graph {
        self.inner
    }
}
