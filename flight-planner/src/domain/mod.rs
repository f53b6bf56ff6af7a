//! Domain types for the flight planner.
//!
//! This module contains the validated value objects the flight network is
//! built from. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod airport_code;
mod coordinates;
mod error;
mod flight_id;
mod time;

pub use airport_code::{AirportCode, InvalidAirportCode};
pub use coordinates::Coordinates;
pub use error::DomainError;
pub use flight_id::{FlightId, InvalidFlightId};
pub use time::{DaySet, Departure, TimeError, parse_weekday};
