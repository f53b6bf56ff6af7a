//! Scheduled flights.

use std::hash::{Hash, Hasher};

use chrono::Duration;

use crate::domain::{AirportCode, DaySet, Departure, DomainError, FlightId};

/// A scheduled service between two airports.
///
/// Equality and hashing use the flight identifier only: two values with the
/// same id are the same flight, whatever their fares or times.
#[derive(Debug, Clone)]
pub struct Flight {
    id: FlightId,
    price: f64,
    duration: Duration,
    departure: Departure,
    origin: AirportCode,
    destination: AirportCode,
}

impl Flight {
    /// Create a flight.
    ///
    /// The price must be finite and non-negative, the duration positive, and
    /// the endpoints distinct.
    pub fn new(
        id: FlightId,
        price: f64,
        duration: Duration,
        departure: Departure,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Self, DomainError> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice(price));
        }
        if duration <= Duration::zero() {
            return Err(DomainError::InvalidDuration(duration.num_minutes()));
        }
        if origin == destination {
            return Err(DomainError::SameOriginAndDestination);
        }
        Ok(Self {
            id,
            price,
            duration,
            departure,
            origin,
            destination,
        })
    }

    pub fn id(&self) -> &FlightId {
        &self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Duration in (possibly fractional) minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration.num_seconds() as f64 / 60.0
    }

    pub fn departure(&self) -> Departure {
        self.departure
    }

    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    pub fn is_cheaper_than(&self, other: &Flight) -> bool {
        self.price < other.price
    }

    pub fn is_quicker_than(&self, other: &Flight) -> bool {
        self.duration < other.duration
    }

    /// Whether the flight departs on one of `days`.
    pub fn departs_on(&self, days: &DaySet) -> bool {
        days.contains(self.departure.day())
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flight {}

impl Hash for Flight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
