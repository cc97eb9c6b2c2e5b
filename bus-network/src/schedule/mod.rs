//! Bus schedule generation.
//!
//! Assigns randomized departures to each leg of each bus's route and
//! computes arrivals from the graph's travel times.

mod config;
mod generate;
mod rng;

pub use config::ScheduleConfig;
pub use generate::{Schedule, SkippedBus, generate_schedule, schedule_bus};
pub use rng::ScheduleRng;
