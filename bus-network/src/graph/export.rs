//! Adjacency matrix and adjacency list views of a graph.

use std::fmt;

use serde::Serialize;

use super::Graph;
use crate::domain::{Minutes, Stop};

/// Square travel-time table indexed by stop insertion order.
///
/// Cell `(i, j)` holds the weight of edge `i -> j`, or 0 when there is no
/// edge. A zero-weight edge therefore reads the same as a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    pub stops: Vec<Stop>,
    pub cells: Vec<Vec<Minutes>>,
}

impl AdjacencyMatrix {
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.stop_count();
        let mut cells = vec![vec![0; n]; n];

        for (from, row) in cells.iter_mut().enumerate() {
            for &(to, weight) in graph.successors(from) {
                row[to] = weight;
            }
        }

        Self {
            stops: graph.stops().to_vec(),
            cells,
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Cell value for `from -> to`, or `None` if either stop is not in the matrix.
    pub fn get(&self, from: &str, to: &str) -> Option<Minutes> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Some(self.cells[i][j])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.as_str() == name)
    }
}

impl fmt::Display for AdjacencyMatrix {
    /// Rows of right-aligned numbers, one row per stop.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|w| w.to_string().len())
            .max()
            .unwrap_or(1);

        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|w| format!("{w:>width$}")).collect();
            writeln!(f, "[{}]", line.join(" "))?;
        }
        Ok(())
    }
}

/// Successors of each stop, weights omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyList {
    pub entries: Vec<(Stop, Vec<Stop>)>,
}

impl AdjacencyList {
    pub fn from_graph(graph: &Graph) -> Self {
        let entries = graph
            .stops()
            .iter()
            .enumerate()
            .map(|(idx, stop)| {
                let successors = graph
                    .successors(idx)
                    .iter()
                    .map(|&(to, _)| graph.stop_at(to).clone())
                    .collect();
                (stop.clone(), successors)
            })
            .collect();

        Self { entries }
    }

    /// Successors of a stop, or `None` if the stop is not listed.
    pub fn successors(&self, name: &str) -> Option<&[Stop]> {
        self.entries
            .iter()
            .find(|(stop, _)| stop.as_str() == name)
            .map(|(_, successors)| successors.as_slice())
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (stop, successors) in &self.entries {
            let names: Vec<&str> = successors.iter().map(Stop::as_str).collect();
            writeln!(f, "{}: [{}]", stop, names.join(", "))?;
        }
        Ok(())
    }
}
