//! Buses and the trips generated for them.

use chrono::Duration;

use super::{ClockTime, Minutes, Stop, TimeError};

/// A named bus service running along an ordered sequence of stops.
///
/// Consecutive stops are expected to be edges in the graph. That is not
/// checked here; schedule generation reports a missing edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Display name, e.g. "Bus 1".
    pub name: String,

    /// Color used when drawing this bus's route.
    pub color: String,

    /// Stops in the order they are served.
    pub route: Vec<Stop>,
}

impl Bus {
    /// Create a new bus.
    pub fn new(name: impl Into<String>, color: impl Into<String>, route: Vec<Stop>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            route,
        }
    }

    /// Consecutive stop pairs along the route.
    ///
    /// A route with fewer than two stops has no legs.
    pub fn legs(&self) -> impl Iterator<Item = (&Stop, &Stop)> + '_ {
        self.route.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Number of legs on the route.
    pub fn leg_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// One scheduled leg of a bus's service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub bus: String,
    pub from: Stop,
    pub to: Stop,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    pub travel_minutes: Minutes,
}

impl Trip {
    /// Create a trip, computing arrival as departure plus travel time.
    pub fn new(
        bus: impl Into<String>,
        from: Stop,
        to: Stop,
        departure: ClockTime,
        travel_minutes: Minutes,
    ) -> Result<Self, TimeError> {
        let arrival = departure.add_minutes(travel_minutes)?;
        Ok(Self {
            bus: bus.into(),
            from,
            to,
            departure,
            arrival,
            travel_minutes,
        })
    }

    /// Time spent travelling on this leg.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Human-readable leg label, e.g. "Downtown -> Midtown".
    pub fn route_label(&self) -> String {
        format!("{} -> {}", self.from, self.to)
    }
}
