//! Fixed network input: stops, travel-time routes and bus assignments.
//!
//! The configuration is plain data. [`Graph::from_config`](crate::graph::Graph::from_config)
//! turns it into a graph, and [`NetworkConfig::buses`] into domain buses.

use serde::{Deserialize, Serialize};

use crate::domain::{Bus, Minutes, NetworkError, Stop};

/// A directed travel-time connection between two named stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
    pub minutes: Minutes,
}

impl RouteSpec {
    pub fn new(from: &str, to: &str, minutes: Minutes) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            minutes,
        }
    }
}

/// A bus and the stops it serves, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusSpec {
    pub name: String,
    pub color: String,
    pub stops: Vec<String>,
}

impl BusSpec {
    pub fn new(name: &str, color: &str, stops: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            stops: stops.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Complete description of a bus network.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Stop names, in the order used for matrix and list exports.
    pub stops: Vec<String>,

    /// Directed routes between declared stops.
    pub routes: Vec<RouteSpec>,

    /// Bus assignments. Route pairs are not checked against `routes` here.
    #[serde(default)]
    pub buses: Vec<BusSpec>,
}

impl NetworkConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert the bus specs into domain buses.
    ///
    /// Only stop names are validated. Whether each leg is an edge is left to
    /// schedule generation.
    pub fn buses(&self) -> Result<Vec<Bus>, NetworkError> {
        self.buses
            .iter()
            .map(|spec| {
                let route = spec
                    .stops
                    .iter()
                    .map(|name| Stop::parse(name))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Bus::new(spec.name.clone(), spec.color.clone(), route))
            })
            .collect()
    }

    /// The Detroit demonstration network.
    ///
    /// Twenty stops and twenty routes. Belle Isle and the stops downstream of
    /// it, and the Brightmoor chain, are not reachable from Downtown.
    pub fn detroit() -> Self {
        let stops = [
            "Downtown",
            "Midtown",
            "Corktown",
            "Greektown",
            "Eastern Market",
            "New Center",
            "Southwest",
            "University District",
            "Palmer Park",
            "Belle Isle",
            "Riverfront",
            "Mexicantown",
            "Grandmont",
            "Jefferson",
            "Hamtramck",
            "Boston Edison",
            "Brightmoor",
            "Old Redford",
            "Indian Village",
            "East English Village",
        ];

        let routes = vec![
            RouteSpec::new("Downtown", "Midtown", 10),
            RouteSpec::new("Midtown", "Corktown", 15),
            RouteSpec::new("Corktown", "Southwest", 10),
            RouteSpec::new("Downtown", "Greektown", 5),
            RouteSpec::new("Greektown", "Eastern Market", 8),
            RouteSpec::new("Eastern Market", "New Center", 20),
            RouteSpec::new("New Center", "Midtown", 12),
            RouteSpec::new("Southwest", "Downtown", 18),
            RouteSpec::new("Midtown", "University District", 14),
            RouteSpec::new("University District", "Palmer Park", 10),
            RouteSpec::new("Palmer Park", "New Center", 8),
            RouteSpec::new("Belle Isle", "Riverfront", 7),
            RouteSpec::new("Riverfront", "Mexicantown", 9),
            RouteSpec::new("Mexicantown", "Grandmont", 12),
            RouteSpec::new("Grandmont", "Jefferson", 15),
            RouteSpec::new("Jefferson", "Hamtramck", 10),
            RouteSpec::new("Hamtramck", "Boston Edison", 11),
            RouteSpec::new("Brightmoor", "Old Redford", 10),
            RouteSpec::new("Old Redford", "Indian Village", 18),
            RouteSpec::new("Indian Village", "East English Village", 12),
        ];

        let buses = vec![
            BusSpec::new(
                "Bus 1",
                "red",
                &["Downtown", "Midtown", "Corktown", "Southwest"],
            ),
            BusSpec::new(
                "Bus 2",
                "blue",
                &["Downtown", "Greektown", "Eastern Market", "New Center"],
            ),
            BusSpec::new(
                "Bus 3",
                "green",
                &["Brightmoor", "Old Redford", "Indian Village", "East English Village"],
            ),
        ];

        Self {
            stops: stops.iter().map(|s| s.to_string()).collect(),
            routes,
            buses,
        }
    }
}
