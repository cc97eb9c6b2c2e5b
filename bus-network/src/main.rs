use std::process::ExitCode;

use tracing::{error, info, warn};

use bus_network::graph::Graph;
use bus_network::logging::init_logger;
use bus_network::network::NetworkConfig;
use bus_network::planner::PathConfig;
use bus_network::render::{Diagram, Report, ReportRequest};
use bus_network::schedule::{ScheduleConfig, ScheduleRng};

/// Optional seed for a reproducible schedule.
const SEED_ENV: &str = "BUS_NETWORK_SEED";

/// Optional path to write the Graphviz diagram to.
const DOT_ENV: &str = "BUS_NETWORK_DOT";

fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let network = NetworkConfig::detroit();
    let graph = match Graph::from_config(&network) {
        Ok(graph) => graph,
        Err(e) => {
            error!(error = %e, "Invalid network configuration");
            return ExitCode::FAILURE;
        }
    };
    let buses = match network.buses() {
        Ok(buses) => buses,
        Err(e) => {
            error!(error = %e, "Invalid bus configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stops = graph.stop_count(),
        edges = graph.edge_count(),
        buses = buses.len(),
        "Loaded network"
    );

    let mut schedule_config = ScheduleConfig::default();
    if let Ok(raw) = std::env::var(SEED_ENV) {
        match raw.parse::<u64>() {
            Ok(seed) => schedule_config = schedule_config.with_seed(seed),
            Err(_) => warn!(value = %raw, "{SEED_ENV} is not a u64, using a random seed"),
        }
    }
    let mut rng = ScheduleRng::from_config(&schedule_config);

    let report = Report::build(
        &graph,
        &buses,
        ReportRequest::default(),
        &PathConfig::default(),
        &schedule_config,
        &mut rng,
    );
    print!("{report}");

    if let Ok(path) = std::env::var(DOT_ENV) {
        let diagram = Diagram::from_graph(&graph, &buses);
        if let Err(e) = diagram.write_dot(&path) {
            error!(error = %e, "Failed to write diagram");
            return ExitCode::FAILURE;
        }
        info!(path = %path, "Diagram written; render with `dot -Tpng`");
    }

    ExitCode::SUCCESS
}
