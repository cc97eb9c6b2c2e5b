//! Schedule generation configuration.

use chrono::Duration;

use crate::domain::{ClockTime, Minutes};

/// Configuration parameters for schedule generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Base time that departure offsets are measured from.
    pub base_time: ClockTime,

    /// Latest departure offset from the base time (minutes, inclusive).
    pub max_offset_mins: Minutes,

    /// Seed for the departure RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl ScheduleConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(base_time: ClockTime, max_offset_mins: Minutes, seed: Option<u64>) -> Self {
        Self {
            base_time,
            max_offset_mins,
            seed,
        }
    }

    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the maximum offset as a Duration.
    pub fn max_offset(&self) -> Duration {
        Duration::minutes(i64::from(self.max_offset_mins))
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_time: ClockTime::default(), // 06:00 AM
            max_offset_mins: 120,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_config() {
        let config = ScheduleConfig::default();

        assert_eq!(config.base_time.to_string(), "06:00 AM");
        assert_eq!(config.max_offset_mins, 120);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn duration_methods() {
        let config = ScheduleConfig::default();
        assert_eq!(config.max_offset(), Duration::minutes(120));
    }

    #[test]
    fn custom_config() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let base = ClockTime::parse_12h("5:30 PM", date).unwrap();
        let config = ScheduleConfig::new(base, 45, Some(7));

        assert_eq!(config.base_time, base);
        assert_eq!(config.max_offset_mins, 45);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn with_seed() {
        let config = ScheduleConfig::default().with_seed(42);
        assert_eq!(config.seed, Some(42));
    }
}
