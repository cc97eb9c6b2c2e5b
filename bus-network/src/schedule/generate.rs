//! Randomized departure/arrival schedules for buses.
//!
//! Each leg of each bus gets an independent departure offset from the base
//! time; its arrival is the departure plus the leg's travel time. Offsets are
//! not chained, so one bus's successive legs can be out of chronological
//! order.

use tracing::{debug, warn};

use super::{ScheduleConfig, ScheduleRng};
use crate::domain::{Bus, NetworkError, Trip};
use crate::graph::Graph;

/// A bus whose schedule could not be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBus {
    pub bus: String,
    pub error: NetworkError,
}

/// Generated trips for every schedulable bus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Trips in bus order, then leg order.
    pub trips: Vec<Trip>,

    /// Buses that were left out, with the reason.
    pub skipped: Vec<SkippedBus>,
}

impl Schedule {
    /// Trips belonging to one bus.
    pub fn trips_for<'a>(&'a self, bus: &'a str) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips.iter().filter(move |trip| trip.bus == bus)
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Schedule every leg of a single bus.
///
/// All legs are checked before any departure is drawn, so a route with a
/// missing edge produces no trips at all.
pub fn schedule_bus(
    graph: &Graph,
    bus: &Bus,
    config: &ScheduleConfig,
    rng: &mut ScheduleRng,
) -> Result<Vec<Trip>, NetworkError> {
    let legs = bus
        .legs()
        .map(|(from, to)| {
            graph
                .edge_weight(from.as_str(), to.as_str())
                .map(|weight| (from, to, weight))
                .map_err(|err| match err {
                    NetworkError::EdgeNotFound { .. } | NetworkError::UnknownStop(_) => {
                        NetworkError::RouteEdgeMissing {
                            bus: bus.name.clone(),
                            from: from.clone(),
                            to: to.clone(),
                        }
                    }
                    other => other,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    legs.into_iter()
        .map(|(from, to, weight)| -> Result<Trip, NetworkError> {
            let offset = rng.offset_minutes(config.max_offset_mins);
            let departure = config.base_time.add_minutes(offset)?;
            Ok(Trip::new(
                bus.name.clone(),
                from.clone(),
                to.clone(),
                departure,
                weight,
            )?)
        })
        .collect()
}

/// Schedule all buses in order.
///
/// A bus that fails is logged and recorded in [`Schedule::skipped`]; the
/// remaining buses are still scheduled.
pub fn generate_schedule(
    graph: &Graph,
    buses: &[Bus],
    config: &ScheduleConfig,
    rng: &mut ScheduleRng,
) -> Schedule {
    let mut schedule = Schedule::default();

    for bus in buses {
        match schedule_bus(graph, bus, config, rng) {
            Ok(trips) => {
                debug!(bus = %bus.name, legs = trips.len(), "Scheduled bus");
                schedule.trips.extend(trips);
            }
            Err(error) => {
                warn!(bus = %bus.name, error = %error, "Skipping bus schedule");
                schedule.skipped.push(SkippedBus {
                    bus: bus.name.clone(),
                    error,
                });
            }
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Stop};
    use crate::network::NetworkConfig;
    use chrono::Duration;

    fn detroit() -> (Graph, Vec<Bus>) {
        let config = NetworkConfig::detroit();
        (Graph::from_config(&config).unwrap(), config.buses().unwrap())
    }

    fn bus(name: &str, stops: &[&str]) -> Bus {
        Bus::new(
            name,
            "black",
            stops.iter().map(|s| Stop::parse(s).unwrap()).collect(),
        )
    }

    fn seeded() -> (ScheduleConfig, ScheduleRng) {
        let config = ScheduleConfig::default().with_seed(42);
        let rng = ScheduleRng::from_config(&config);
        (config, rng)
    }

    #[test]
    fn detroit_schedule_has_every_leg() {
        let (graph, buses) = detroit();
        let (config, mut rng) = seeded();

        let schedule = generate_schedule(&graph, &buses, &config, &mut rng);

        assert_eq!(schedule.trips.len(), 9);
        assert!(schedule.skipped.is_empty());
        assert_eq!(schedule.trips_for("Bus 1").count(), 3);
        assert_eq!(schedule.trips_for("Bus 3").count(), 3);

        let labels: Vec<String> = schedule
            .trips_for("Bus 2")
            .map(Trip::route_label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Downtown -> Greektown",
                "Greektown -> Eastern Market",
                "Eastern Market -> New Center",
            ]
        );
    }

    #[test]
    fn arrival_is_departure_plus_weight() {
        let (graph, buses) = detroit();
        let (config, mut rng) = seeded();

        let schedule = generate_schedule(&graph, &buses, &config, &mut rng);

        for trip in &schedule.trips {
            let weight = graph
                .edge_weight(trip.from.as_str(), trip.to.as_str())
                .unwrap();
            assert_eq!(trip.travel_minutes, weight);
            assert_eq!(
                trip.arrival.signed_duration_since(trip.departure),
                Duration::minutes(i64::from(weight))
            );
        }
    }

    #[test]
    fn departures_within_window() {
        let (graph, buses) = detroit();
        let (config, mut rng) = seeded();

        let schedule = generate_schedule(&graph, &buses, &config, &mut rng);

        for trip in &schedule.trips {
            let offset = trip.departure.signed_duration_since(config.base_time);
            assert!(offset >= Duration::zero());
            assert!(offset <= config.max_offset());
        }
    }

    #[test]
    fn same_seed_same_schedule() {
        let (graph, buses) = detroit();
        let config = ScheduleConfig::default().with_seed(7);

        let a = generate_schedule(&graph, &buses, &config, &mut ScheduleRng::from_config(&config));
        let b = generate_schedule(&graph, &buses, &config, &mut ScheduleRng::from_config(&config));
        assert_eq!(a, b);
    }

    #[test]
    fn missing_edge_yields_no_trips() {
        let (graph, _) = detroit();
        let (config, mut rng) = seeded();

        // Midtown -> Downtown is not an edge (only Downtown -> Midtown is)
        let broken = bus("Bus 9", &["Downtown", "Midtown", "Downtown"]);

        assert_eq!(
            schedule_bus(&graph, &broken, &config, &mut rng),
            Err(NetworkError::RouteEdgeMissing {
                bus: "Bus 9".to_string(),
                from: Stop::parse("Midtown").unwrap(),
                to: Stop::parse("Downtown").unwrap(),
            })
        );
    }

    #[test]
    fn unknown_stop_in_route_is_missing_edge() {
        let (graph, _) = detroit();
        let (config, mut rng) = seeded();
        let broken = bus("Bus 9", &["Downtown", "Atlantis"]);

        assert!(matches!(
            schedule_bus(&graph, &broken, &config, &mut rng),
            Err(NetworkError::RouteEdgeMissing { .. })
        ));
    }

    #[test]
    fn failing_bus_is_skipped_others_kept() {
        let (graph, mut buses) = detroit();
        buses.insert(1, bus("Bus 9", &["Belle Isle", "Downtown"]));
        let (config, mut rng) = seeded();

        let schedule = generate_schedule(&graph, &buses, &config, &mut rng);

        assert_eq!(schedule.trips.len(), 9);
        assert_eq!(schedule.trips_for("Bus 9").count(), 0);
        assert_eq!(schedule.skipped.len(), 1);
        assert_eq!(schedule.skipped[0].bus, "Bus 9");
        assert!(matches!(
            schedule.skipped[0].error,
            NetworkError::RouteEdgeMissing { .. }
        ));
    }

    #[test]
    fn single_stop_bus_has_no_trips() {
        let (graph, _) = detroit();
        let (config, mut rng) = seeded();

        let trips = schedule_bus(&graph, &bus("Shuttle", &["Downtown"]), &config, &mut rng).unwrap();
        assert!(trips.is_empty());
    }

    #[test]
    fn zero_window_departs_at_base_time() {
        let (graph, buses) = detroit();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let base = ClockTime::parse_12h("8:15 AM", date).unwrap();
        let config = ScheduleConfig::new(base, 0, Some(1));
        let mut rng = ScheduleRng::from_config(&config);

        let schedule = generate_schedule(&graph, &buses, &config, &mut rng);
        for trip in &schedule.trips {
            assert_eq!(trip.departure, config.base_time);
        }
    }
}
