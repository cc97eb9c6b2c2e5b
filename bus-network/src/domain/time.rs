//! Clock time handling for bus schedules.
//!
//! Schedules are printed on a 12-hour clock ("06:37 AM"). Times carry a date
//! so that a trip departing late in the evening can arrive after midnight
//! without wrapping back to the morning.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Travel time along an edge, in whole minutes.
pub type Minutes = u32;

/// Format used for parsing and displaying clock times.
const TWELVE_HOUR_FORMAT: &str = "%I:%M %p";

/// Error returned when parsing or shifting a clock time fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A date-aware wall-clock time.
///
/// # Examples
///
/// ```
/// use bus_network::domain::ClockTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let time = ClockTime::parse_12h("6:00 AM", date).unwrap();
/// assert_eq!(time.to_string(), "06:00 AM");
///
/// let later = time.add_minutes(95).unwrap();
/// assert_eq!(later.to_string(), "07:35 AM");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveDateTime);

impl ClockTime {
    /// Create a new ClockTime from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self(date.and_time(time))
    }

    /// Parse a 12-hour clock time such as "6:00 AM" or "11:45 pm".
    ///
    /// ```
    /// use bus_network::domain::ClockTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    ///
    /// assert!(ClockTime::parse_12h("12:00 PM", date).is_ok());
    /// assert!(ClockTime::parse_12h("07:05 pm", date).is_ok());
    ///
    /// assert!(ClockTime::parse_12h("13:00 PM", date).is_err());
    /// assert!(ClockTime::parse_12h("06:00", date).is_err());
    /// ```
    pub fn parse_12h(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        let time = NaiveTime::parse_from_str(s.trim(), TWELVE_HOUR_FORMAT)
            .map_err(|_| TimeError::new("expected HH:MM AM/PM format"))?;
        Ok(Self::new(date, time))
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the time component.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Returns the hour on a 24-hour clock (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Add a duration, advancing the date when midnight is crossed.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }

    /// Add a number of minutes.
    ///
    /// ```
    /// use bus_network::domain::ClockTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let time = ClockTime::parse_12h("11:50 PM", date).unwrap();
    ///
    /// let later = time.add_minutes(20).unwrap();
    /// assert_eq!(later.to_string(), "12:10 AM");
    /// assert_eq!(later.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    /// ```
    pub fn add_minutes(&self, minutes: Minutes) -> Result<Self, TimeError> {
        self.checked_add(Duration::minutes(i64::from(minutes)))
            .ok_or_else(|| TimeError::new("time overflow"))
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl Default for ClockTime {
    /// 06:00 AM on the chrono default date.
    fn default() -> Self {
        Self::new(
            NaiveDate::default(),
            NaiveTime::default() + Duration::hours(6),
        )
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClockTime({} {:02}:{:02})",
            self.date(),
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TWELVE_HOUR_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_morning_and_evening() {
        let d = date(2024, 3, 15);

        let t = ClockTime::parse_12h("6:00 AM", d).unwrap();
        assert_eq!(t.hour(), 6);
        assert_eq!(t.minute(), 0);

        let t = ClockTime::parse_12h("06:45 PM", d).unwrap();
        assert_eq!(t.hour(), 18);
        assert_eq!(t.minute(), 45);
    }

    #[test]
    fn noon_and_midnight() {
        let d = date(2024, 3, 15);

        assert_eq!(ClockTime::parse_12h("12:00 PM", d).unwrap().hour(), 12);
        assert_eq!(ClockTime::parse_12h("12:00 AM", d).unwrap().hour(), 0);
    }

    #[test]
    fn lowercase_suffix_accepted() {
        let d = date(2024, 3, 15);
        let t = ClockTime::parse_12h("9:30 am", d).unwrap();
        assert_eq!(t.to_string(), "09:30 AM");
    }

    #[test]
    fn reject_invalid() {
        let d = date(2024, 3, 15);

        assert!(ClockTime::parse_12h("", d).is_err());
        assert!(ClockTime::parse_12h("06:00", d).is_err());
        assert!(ClockTime::parse_12h("13:00 PM", d).is_err());
        assert!(ClockTime::parse_12h("06:60 AM", d).is_err());
        assert!(ClockTime::parse_12h("six AM", d).is_err());
    }

    #[test]
    fn error_display() {
        let err = ClockTime::parse_12h("bogus", date(2024, 3, 15)).unwrap_err();
        assert_eq!(err.to_string(), "invalid time: expected HH:MM AM/PM format");
    }

    #[test]
    fn display_pads_hour() {
        let t = ClockTime::new(date(2024, 3, 15), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        assert_eq!(t.to_string(), "07:05 AM");

        let t = ClockTime::new(date(2024, 3, 15), NaiveTime::from_hms_opt(13, 20, 0).unwrap());
        assert_eq!(t.to_string(), "01:20 PM");
    }

    #[test]
    fn debug_includes_date() {
        let t = ClockTime::new(date(2024, 3, 15), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(format!("{:?}", t), "ClockTime(2024-03-15 14:30)");
    }

    #[test]
    fn add_minutes_same_day() {
        let t = ClockTime::parse_12h("6:00 AM", date(2024, 3, 15)).unwrap();
        let later = t.add_minutes(140).unwrap();

        assert_eq!(later.to_string(), "08:20 AM");
        assert_eq!(later.date(), date(2024, 3, 15));
        assert_eq!(later.signed_duration_since(t), Duration::minutes(140));
    }

    #[test]
    fn add_minutes_crosses_noon() {
        let t = ClockTime::parse_12h("11:55 AM", date(2024, 3, 15)).unwrap();
        assert_eq!(t.add_minutes(10).unwrap().to_string(), "12:05 PM");
    }

    #[test]
    fn add_minutes_crosses_midnight() {
        let t = ClockTime::parse_12h("11:30 PM", date(2024, 3, 15)).unwrap();
        let later = t.add_minutes(45).unwrap();

        assert_eq!(later.to_string(), "12:15 AM");
        assert_eq!(later.date(), date(2024, 3, 16));
        assert!(later > t);
    }

    #[test]
    fn default_is_six_am() {
        let t = ClockTime::default();
        assert_eq!(t.to_string(), "06:00 AM");
        assert_eq!(t.hour(), 6);
    }

    #[test]
    fn ordering_across_dates() {
        let late = ClockTime::parse_12h("11:00 PM", date(2024, 3, 15)).unwrap();
        let early_next = ClockTime::parse_12h("1:00 AM", date(2024, 3, 16)).unwrap();
        assert!(late < early_next);
    }
}
