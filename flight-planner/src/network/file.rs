//! JSON network files.
//!
//! A network file lists airports, then the routes between them, then the
//! flights on those routes:
//!
//! ```json
//! {
//!   "airports": [{ "code": "EZE", "latitude": -34.82, "longitude": -58.53 }],
//!   "routes": [{ "origin": "EZE", "destination": "MDZ" }],
//!   "flights": [{
//!     "airline": "AR", "number": 1402, "price": 120.0, "duration_mins": 110,
//!     "departure": "Mon 07:30", "origin": "EZE", "destination": "MDZ"
//!   }]
//! }
//! ```
//!
//! The same record types are used as HTTP request bodies.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{
    AirportCode, Coordinates, Departure, DomainError, FlightId, InvalidAirportCode,
    InvalidFlightId, TimeError,
};

use super::{Flight, FlightNetwork, NetworkError};

/// A record that failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    AirportCode(#[from] InvalidAirportCode),

    #[error(transparent)]
    FlightId(#[from] InvalidFlightId),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors from loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid network JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("inconsistent network: {0}")]
    Network(#[from] NetworkError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportRecord {
    pub fn parse(&self) -> Result<(AirportCode, Coordinates), RecordError> {
        let code = AirportCode::parse_normalized(&self.code)?;
        let coordinates = Coordinates::new(self.latitude, self.longitude)?;
        Ok((code, coordinates))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
}

impl RouteRecord {
    pub fn parse(&self) -> Result<(AirportCode, AirportCode), RecordError> {
        Ok((
            AirportCode::parse_normalized(&self.origin)?,
            AirportCode::parse_normalized(&self.destination)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub number: i64,
    pub price: f64,
    pub duration_mins: i64,
    /// `"<weekday> HH:MM"`, e.g. `"Mon 07:30"`
    pub departure: String,
    pub origin: String,
    pub destination: String,
}

impl FlightRecord {
    pub fn parse(&self) -> Result<Flight, RecordError> {
        let id = FlightId::from_signed(self.airline.trim(), self.number)?;
        let departure = Departure::parse(&self.departure)?;
        let duration = Duration::try_minutes(self.duration_mins)
            .ok_or(DomainError::InvalidDuration(self.duration_mins))?;
        let flight = Flight::new(
            id,
            self.price,
            duration,
            departure,
            AirportCode::parse_normalized(&self.origin)?,
            AirportCode::parse_normalized(&self.destination)?,
        )?;
        Ok(flight)
    }

    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            airline: flight.id().airline().to_string(),
            number: i64::from(flight.id().number()),
            price: flight.price(),
            duration_mins: flight.duration().num_minutes(),
            departure: flight.departure().to_string(),
            origin: flight.origin().to_string(),
            destination: flight.destination().to_string(),
        }
    }
}

/// The on-disk shape of a flight network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub airports: Vec<AirportRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub flights: Vec<FlightRecord>,
}

impl NetworkFile {
    /// Snapshot a network in file form.
    pub fn from_network(network: &FlightNetwork) -> Self {
        let mut file = Self::default();
        for airport in network.airports() {
            file.airports.push(AirportRecord {
                code: airport.code().to_string(),
                latitude: airport.coordinates().latitude(),
                longitude: airport.coordinates().longitude(),
            });
            for route in airport.routes() {
                file.routes.push(RouteRecord {
                    origin: route.origin().to_string(),
                    destination: route.destination().to_string(),
                });
                file.flights
                    .extend(route.flights().map(FlightRecord::from_flight));
            }
        }
        file
    }

    /// Build a network, failing on the first invalid record.
    pub fn build(&self) -> Result<FlightNetwork, LoadError> {
        let mut network = FlightNetwork::new();
        for record in &self.airports {
            let (code, coordinates) = record.parse()?;
            network.add_airport(code, coordinates)?;
        }
        for record in &self.routes {
            let (origin, destination) = record.parse()?;
            network.add_route(origin, destination)?;
        }
        for record in &self.flights {
            network.add_flight(record.parse()?)?;
        }
        Ok(network)
    }
}

impl FlightNetwork {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        file.build()
    }

    /// Load a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            airports = network.len(),
            routes = network.route_count(),
            flights = network.flight_count(),
            "Loaded flight network"
        );
        Ok(network)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&NetworkFile::from_network(self))
    }
}
