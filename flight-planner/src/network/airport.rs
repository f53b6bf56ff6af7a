//! Airports: the vertices of the flight network.

use crate::collections::AvlMap;
use crate::domain::{AirportCode, Coordinates, DaySet, FlightId};

use super::error::NetworkError;
use super::flight::Flight;
use super::route::Route;

/// An airport and its outgoing routes, keyed by destination.
#[derive(Debug, Clone)]
pub struct Airport {
    code: AirportCode,
    coordinates: Coordinates,
    routes: AvlMap<AirportCode, Route>,
}

impl Airport {
    pub fn new(code: AirportCode, coordinates: Coordinates) -> Self {
        Self {
            code,
            coordinates,
            routes: AvlMap::new(),
        }
    }

    pub fn code(&self) -> AirportCode {
        self.code
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Declares a route to `destination`.
    ///
    /// Returns `false` if the route already existed; its flights are kept.
    pub fn add_route(&mut self, destination: AirportCode) -> Result<bool, NetworkError> {
        if destination == self.code {
            return Err(NetworkError::SelfRoute(destination));
        }
        if self.routes.contains_key(&destination) {
            return Ok(false);
        }
        Ok(self
            .routes
            .insert(destination, Route::new(self.code, destination)))
    }

    pub fn remove_route(&mut self, destination: &AirportCode) -> Option<Route> {
        self.routes.remove(destination)
    }

    pub fn route_to(&self, destination: &AirportCode) -> Option<&Route> {
        self.routes.get(destination)
    }

    pub fn has_route_to(&self, destination: &AirportCode) -> bool {
        self.routes.contains_key(destination)
    }

    /// Outgoing routes in ascending destination order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + Clone {
        self.routes.values()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &AirportCode> + Clone {
        self.routes.keys()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn flight_count(&self) -> usize {
        self.routes.values().map(Route::len).sum()
    }

    /// Adds a flight departing this airport.
    ///
    /// The route to the flight's destination must already be declared.
    pub fn add_flight(&mut self, flight: Flight) -> Result<bool, NetworkError> {
        let destination = flight.destination();
        let route = self
            .routes
            .get_mut(&destination)
            .ok_or(NetworkError::NoRoute {
                origin: self.code,
                destination,
            })?;
        route.add_flight(flight)
    }

    pub fn remove_flight(
        &mut self,
        destination: &AirportCode,
        id: &FlightId,
    ) -> Result<Flight, NetworkError> {
        let origin = self.code;
        let route = self
            .routes
            .get_mut(destination)
            .ok_or(NetworkError::NoRoute {
                origin,
                destination: *destination,
            })?;
        route
            .remove_flight(id)
            .ok_or_else(|| NetworkError::UnknownFlight {
                id: id.clone(),
                origin,
                destination: *destination,
            })
    }

    /// Whether an eligible flight to `destination` exists.
    pub fn has_flight_to(&self, destination: &AirportCode, days: Option<&DaySet>) -> bool {
        self.route_to(destination)
            .is_some_and(|route| route.has_flight(days))
    }

    pub fn cheapest_to(&self, destination: &AirportCode, days: Option<&DaySet>) -> Option<&Flight> {
        self.route_to(destination)?.cheapest(days)
    }

    pub fn quickest_to(&self, destination: &AirportCode, days: Option<&DaySet>) -> Option<&Flight> {
        self.route_to(destination)?.quickest(days)
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airport {}
