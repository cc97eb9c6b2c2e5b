//! Text report of every algorithm run over the network.

use std::fmt;

use tracing::info;

use crate::domain::{Bus, NetworkError, Stop};
use crate::graph::{AdjacencyList, AdjacencyMatrix, Graph};
use crate::planner::{Path, PathConfig, bfs_edges, dijkstra};
use crate::schedule::{Schedule, ScheduleConfig, ScheduleRng, generate_schedule};

/// Which queries the report runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Source of the shortest-path queries.
    pub source: String,

    /// Target of the shortest-path queries.
    pub target: String,

    /// Where the breadth-first traversal starts.
    pub traversal_source: String,
}

impl ReportRequest {
    pub fn new(source: &str, target: &str, traversal_source: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            traversal_source: traversal_source.to_string(),
        }
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new("Downtown", "New Center", "Downtown")
    }
}

/// Results of every query, ready to print.
///
/// Each query keeps its own `Result`, so one failing query does not hide the
/// others.
#[derive(Debug, Clone)]
pub struct Report {
    pub request: ReportRequest,
    pub dijkstra: Result<Path, NetworkError>,
    pub astar: Result<Path, NetworkError>,
    pub traversal: Result<Vec<(Stop, Stop)>, NetworkError>,
    pub matrix: AdjacencyMatrix,
    pub list: AdjacencyList,
    pub schedule: Schedule,
}

impl Report {
    /// Run all queries against the graph.
    pub fn build(
        graph: &Graph,
        buses: &[Bus],
        request: ReportRequest,
        path_config: &PathConfig,
        schedule_config: &ScheduleConfig,
        rng: &mut ScheduleRng,
    ) -> Self {
        let dijkstra = dijkstra(graph, &request.source, &request.target);
        let astar = path_config.shortest_path(graph, &request.source, &request.target);
        let traversal = bfs_edges(graph, &request.traversal_source).map(|edges| {
            edges
                .map(|(parent, child)| (parent.clone(), child.clone()))
                .collect()
        });
        let schedule = generate_schedule(graph, buses, schedule_config, rng);

        info!(
            source = %request.source,
            target = %request.target,
            path_found = dijkstra.is_ok(),
            trips = schedule.trips.len(),
            skipped = schedule.skipped.len(),
            "Report built"
        );

        Self {
            request,
            dijkstra,
            astar,
            traversal,
            matrix: AdjacencyMatrix::from_graph(graph),
            list: AdjacencyList::from_graph(graph),
            schedule,
        }
    }

    fn write_path(
        &self,
        f: &mut fmt::Formatter<'_>,
        result: &Result<Path, NetworkError>,
    ) -> fmt::Result {
        write!(
            f,
            "Shortest Path ({} to {}): ",
            self.request.source, self.request.target
        )?;
        match result {
            Ok(path) => writeln!(f, "{path}"),
            Err(err) => writeln!(f, "no path ({err})"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dijkstra's Algorithm:")?;
        self.write_path(f, &self.dijkstra)?;

        writeln!(f)?;
        writeln!(f, "A* Algorithm:")?;
        self.write_path(f, &self.astar)?;

        writeln!(f)?;
        writeln!(f, "Breadth-First Search:")?;
        write!(
            f,
            "Breadth-First Traversal Starting from {}: ",
            self.request.traversal_source
        )?;
        match &self.traversal {
            Ok(edges) => {
                let pairs: Vec<String> = edges
                    .iter()
                    .map(|(parent, child)| format!("({parent}, {child})"))
                    .collect();
                writeln!(f, "[{}]", pairs.join(", "))?;
            }
            Err(err) => writeln!(f, "unavailable ({err})")?,
        }

        writeln!(f)?;
        writeln!(f, "Adjacency Matrix:")?;
        write!(f, "{}", self.matrix)?;

        writeln!(f)?;
        writeln!(f, "Adjacency List:")?;
        write!(f, "{}", self.list)?;

        writeln!(f)?;
        writeln!(f, "Bus Schedules:")?;
        for trip in &self.schedule.trips {
            writeln!(
                f,
                "Bus: {}, Route: {}, Departure: {}, Arrival: {}",
                trip.bus,
                trip.route_label(),
                trip.departure,
                trip.arrival
            )?;
        }
        for skipped in &self.schedule.skipped {
            writeln!(f, "Bus: {}, not scheduled: {}", skipped.bus, skipped.error)?;
        }

        Ok(())
    }
}
