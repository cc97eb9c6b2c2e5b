//! Domain types for the bus network.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod bus;
mod error;
mod stop;
mod time;

pub use bus::{Bus, Trip};
pub use error::NetworkError;
pub use stop::{InvalidStop, Stop};
pub use time::{ClockTime, Minutes, TimeError};
