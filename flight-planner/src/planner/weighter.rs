//! Edge weights for the path search.
//!
//! A route between two airports can carry many flights. A [`Weighter`] picks
//! the single best eligible flight on a route and turns it into a scalar
//! weight, so the search only ever sees one weighted edge per airport pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AirportCode, DaySet, Departure};
use crate::network::{Flight, Route};

/// What an itinerary is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Minimise the sum of ticket prices
    Price,
    /// Minimise the sum of flight durations, in minutes
    Duration,
}

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion {0:?}, expected \"price\" or \"duration\"")]
pub struct InvalidCriterion(String);

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Criterion::Price),
            "duration" => Ok(Criterion::Duration),
            _ => Err(InvalidCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Price => f.write_str("price"),
            Criterion::Duration => f.write_str("duration"),
        }
    }
}

/// A seat on a flight at a chosen departure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket<'a> {
    flight: &'a Flight,
    departure: Departure,
}

impl<'a> Ticket<'a> {
    /// A ticket for the flight's scheduled departure.
    pub fn new(flight: &'a Flight) -> Self {
        Self {
            flight,
            departure: flight.departure(),
        }
    }

    pub fn flight(&self) -> &'a Flight {
        self.flight
    }

    pub fn departure(&self) -> Departure {
        self.departure
    }

    pub fn origin(&self) -> AirportCode {
        self.flight.origin()
    }

    pub fn destination(&self) -> AirportCode {
        self.flight.destination()
    }
}

/// A ticket with the weight the search assigns to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTicket<'a> {
    pub ticket: Ticket<'a>,
    pub weight: f64,
}

/// Selects the minimal-cost eligible flight on a route.
pub trait Weighter {
    /// The best flight on `route` whose departure day is in `days` (any day
    /// when `None`), or `None` if no flight is eligible.
    ///
    /// Weights must be non-negative and finite.
    fn min_ticket<'a>(&self, route: &'a Route, days: Option<&DaySet>)
    -> Option<WeightedTicket<'a>>;
}

/// Weights flights by price or by duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionWeighter {
    criterion: Criterion,
}

impl CriterionWeighter {
    pub fn new(criterion: Criterion) -> Self {
        Self { criterion }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn weight(&self, flight: &Flight) -> f64 {
        match self.criterion {
            Criterion::Price => flight.price(),
            Criterion::Duration => flight.duration_minutes(),
        }
    }
}

impl Weighter for CriterionWeighter {
    fn min_ticket<'a>(
        &self,
        route: &'a Route,
        days: Option<&DaySet>,
    ) -> Option<WeightedTicket<'a>> {
        let flight = match self.criterion {
            Criterion::Price => route.cheapest(days),
            Criterion::Duration => route.quickest(days),
        }?;
        Some(WeightedTicket {
            ticket: Ticket::new(flight),
            weight: self.weight(flight),
        })
    }
}
