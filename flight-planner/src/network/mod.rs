//! The flight network graph.
//!
//! Airports are vertices; each airport owns its outgoing [`Route`]s, and each
//! route owns the [`Flight`]s between that ordered pair of airports. Flights
//! refer to their endpoints by [`AirportCode`], so the graph has a single
//! owner and no reference cycles.
//!
//! A route exists only if it was declared with [`FlightNetwork::add_route`];
//! flights can only be added to declared routes.

mod airport;
mod error;
mod file;
mod flight;
mod route;

pub use airport::Airport;
pub use error::NetworkError;
pub use file::{AirportRecord, FlightRecord, LoadError, NetworkFile, RecordError, RouteRecord};
pub use flight::Flight;
pub use route::Route;

use tracing::debug;

use crate::collections::AvlMap;
use crate::domain::{AirportCode, Coordinates, FlightId};

/// A set of airports with their routes and flights.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: AvlMap<AirportCode, Airport>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn airport(&self, code: &AirportCode) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains(&self, code: &AirportCode) -> bool {
        self.airports.contains_key(code)
    }

    /// Airports in ascending code order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> + Clone {
        self.airports.values()
    }

    pub fn route_count(&self) -> usize {
        self.airports.values().map(Airport::route_count).sum()
    }

    pub fn flight_count(&self) -> usize {
        self.airports.values().map(Airport::flight_count).sum()
    }

    pub fn add_airport(
        &mut self,
        code: AirportCode,
        coordinates: Coordinates,
    ) -> Result<(), NetworkError> {
        if self.airports.contains_key(&code) {
            return Err(NetworkError::DuplicateAirport(code));
        }
        self.airports.insert(code, Airport::new(code, coordinates));
        debug!(airport = %code, "Added airport");
        Ok(())
    }

    /// Removes an airport together with every route into or out of it.
    pub fn remove_airport(&mut self, code: &AirportCode) -> Result<Airport, NetworkError> {
        let removed = self
            .airports
            .remove(code)
            .ok_or(NetworkError::UnknownAirport(*code))?;

        let inbound: Vec<AirportCode> = self
            .airports
            .values()
            .filter(|a| a.has_route_to(code))
            .map(Airport::code)
            .collect();
        for origin in &inbound {
            if let Some(airport) = self.airports.get_mut(origin) {
                airport.remove_route(code);
            }
        }

        debug!(
            airport = %code,
            inbound_routes = inbound.len(),
            "Removed airport"
        );
        Ok(removed)
    }

    /// Declares a route. Returns `Ok(false)` if it already existed.
    pub fn add_route(
        &mut self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<bool, NetworkError> {
        if !self.airports.contains_key(&destination) {
            return Err(NetworkError::UnknownAirport(destination));
        }
        let airport = self.airport_mut(&origin)?;
        let added = airport.add_route(destination)?;
        debug!(%origin, %destination, added, "Declared route");
        Ok(added)
    }

    /// Removes a route and all of its flights.
    pub fn remove_route(
        &mut self,
        origin: &AirportCode,
        destination: &AirportCode,
    ) -> Result<Route, NetworkError> {
        let airport = self.airport_mut(origin)?;
        let route = airport
            .remove_route(destination)
            .ok_or(NetworkError::NoRoute {
                origin: *origin,
                destination: *destination,
            })?;
        debug!(%origin, %destination, flights = route.len(), "Removed route");
        Ok(route)
    }

    /// Adds a flight to its declared route, replacing any flight with the
    /// same id there. Returns `Ok(true)` if the flight id was new.
    pub fn add_flight(&mut self, flight: Flight) -> Result<bool, NetworkError> {
        let destination = flight.destination();
        if !self.airports.contains_key(&destination) {
            return Err(NetworkError::UnknownAirport(destination));
        }
        let id = flight.id().clone();
        let origin = flight.origin();
        let added = self.airport_mut(&origin)?.add_flight(flight)?;
        debug!(flight = %id, %origin, %destination, added, "Added flight");
        Ok(added)
    }

    pub fn remove_flight(
        &mut self,
        origin: &AirportCode,
        destination: &AirportCode,
        id: &FlightId,
    ) -> Result<Flight, NetworkError> {
        let flight = self.airport_mut(origin)?.remove_flight(destination, id)?;
        debug!(flight = %id, %origin, %destination, "Removed flight");
        Ok(flight)
    }

    fn airport_mut(&mut self, code: &AirportCode) -> Result<&mut Airport, NetworkError> {
        self.airports
            .get_mut(code)
            .ok_or(NetworkError::UnknownAirport(*code))
    }
}
