//! Stop name type.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid stop name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop name: {reason}")]
pub struct InvalidStop {
    reason: &'static str,
}

/// A named stop in the transit network.
///
/// Names are trimmed and must be non-empty. Clones share the underlying
/// string, so stops can be handed out freely by the graph.
///
/// # Examples
///
/// ```
/// use bus_network::domain::Stop;
///
/// let downtown = Stop::parse("Downtown").unwrap();
/// assert_eq!(downtown.as_str(), "Downtown");
///
/// // Surrounding whitespace is dropped
/// assert_eq!(Stop::parse("  Midtown ").unwrap().as_str(), "Midtown");
///
/// // Blank names are rejected
/// assert!(Stop::parse("").is_err());
/// assert!(Stop::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stop(Arc<str>);

impl Stop {
    /// Parse a stop name.
    pub fn parse(s: &str) -> Result<Self, InvalidStop> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStop {
                reason: "must not be blank",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidStop {
                reason: "must not contain control characters",
            });
        }

        Ok(Stop(Arc::from(trimmed)))
    }

    /// Returns the stop name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hash of Arc<str> matches hash of str, so maps keyed by Stop accept &str lookups.
impl Borrow<str> for Stop {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for Stop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.as_str())
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
