//! Data transfer objects for web requests and responses.
//!
//! Airport, route and flight creation bodies reuse the network file records
//! ([`AirportRecord`](crate::network::AirportRecord) and friends).

use serde::{Deserialize, Serialize};

use crate::network::Airport;
use crate::planner::{Criterion, Itinerary, Ticket};

/// An airport with its outgoing routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportSummary {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Codes of airports with a declared route from this one
    pub destinations: Vec<String>,
}

impl AirportSummary {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            code: airport.code().to_string(),
            latitude: airport.coordinates().latitude(),
            longitude: airport.coordinates().longitude(),
            destinations: airport.destinations().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AirportsResponse {
    pub airports: Vec<AirportSummary>,
}

/// Whether a create request added something new.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub created: bool,
}

/// Request to plan an itinerary.
#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    pub origin: String,
    pub destination: String,
    pub criterion: Criterion,
    /// Weekday names the first flight may depart on (e.g. `["Mon", "Tue"]`)
    #[serde(default)]
    pub days: Option<Vec<String>>,
}

/// One flight of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    pub airline: String,
    pub number: u32,
    pub origin: String,
    pub destination: String,
    /// `"<weekday> HH:MM"`
    pub departure: String,
    pub price: f64,
    pub duration_mins: i64,
}

impl LegResult {
    pub fn from_ticket(ticket: &Ticket<'_>) -> Self {
        let flight = ticket.flight();
        Self {
            airline: flight.id().airline().to_string(),
            number: flight.id().number(),
            origin: ticket.origin().to_string(),
            destination: ticket.destination().to_string(),
            departure: ticket.departure().to_string(),
            price: flight.price(),
            duration_mins: flight.duration().num_minutes(),
        }
    }
}

/// A planned itinerary; `airports` is empty when no path exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub criterion: Criterion,
    pub airports: Vec<String>,
    pub legs: Vec<LegResult>,
    /// Total price, or total minutes in the air
    pub total_weight: f64,
}

impl ItineraryResponse {
    pub fn from_itinerary(itinerary: &Itinerary<'_>, criterion: Criterion) -> Self {
        Self {
            criterion,
            airports: itinerary
                .codes()
                .iter()
                .map(ToString::to_string)
                .collect(),
            legs: itinerary.tickets().iter().map(LegResult::from_ticket).collect(),
            total_weight: itinerary.total_weight(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
