//! Bundles of flights between one ordered pair of airports.

use crate::collections::AvlMap;
use crate::domain::{AirportCode, DaySet, FlightId};

use super::error::NetworkError;
use super::flight::Flight;

/// Every flight from `origin` to `destination`, ordered by flight id.
///
/// Selection queries take an optional day restriction: with `Some(days)`
/// only flights departing on one of those days are eligible.
#[derive(Debug, Clone)]
pub struct Route {
    origin: AirportCode,
    destination: AirportCode,
    flights: AvlMap<FlightId, Flight>,
}

impl Route {
    pub fn new(origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin,
            destination,
            flights: AvlMap::new(),
        }
    }

    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Adds `flight`, replacing any flight with the same id.
    ///
    /// Returns `Ok(true)` if the id was new on this route.
    pub fn add_flight(&mut self, flight: Flight) -> Result<bool, NetworkError> {
        if flight.origin() != self.origin || flight.destination() != self.destination {
            return Err(NetworkError::FlightRouteMismatch {
                id: flight.id().clone(),
                origin: self.origin,
                destination: self.destination,
            });
        }
        Ok(self.flights.insert(flight.id().clone(), flight))
    }

    pub fn remove_flight(&mut self, id: &FlightId) -> Option<Flight> {
        self.flights.remove(id)
    }

    pub fn flight(&self, id: &FlightId) -> Option<&Flight> {
        self.flights.get(id)
    }

    /// Flights in id order.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> + Clone {
        self.flights.values()
    }

    fn eligible<'a>(
        &'a self,
        days: Option<&DaySet>,
    ) -> impl Iterator<Item = &'a Flight> + Clone + use<'a> {
        let days = days.copied();
        self.flights
            .values()
            .filter(move |f| days.is_none_or(|d| f.departs_on(&d)))
    }

    /// Whether any eligible flight exists.
    pub fn has_flight(&self, days: Option<&DaySet>) -> bool {
        self.eligible(days).next().is_some()
    }

    /// The eligible flight with the lowest price; ties go to the lowest id.
    pub fn cheapest<'a>(&'a self, days: Option<&DaySet>) -> Option<&'a Flight> {
        self.eligible(days)
            .min_by(|a, b| a.price().total_cmp(&b.price()))
    }

    /// The eligible flight with the shortest duration; ties go to the lowest id.
    pub fn quickest<'a>(&'a self, days: Option<&DaySet>) -> Option<&'a Flight> {
        self.eligible(days).min_by_key(|f| f.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Departure;
    use chrono::Duration;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn flight(number: u32, price: f64, mins: i64, departure: &str) -> Flight {
        Flight::new(
            FlightId::new("AR", number).unwrap(),
            price,
            Duration::minutes(mins),
            Departure::parse(departure).unwrap(),
            code("EZE"),
            code("BRC"),
        )
        .unwrap()
    }

    fn route() -> Route {
        let mut route = Route::new(code("EZE"), code("BRC"));
        route.add_flight(flight(1, 300.0, 150, "Mon 08:00")).unwrap();
        route.add_flight(flight(2, 200.0, 180, "Tue 08:00")).unwrap();
        route.add_flight(flight(3, 250.0, 140, "Sun 08:00")).unwrap();
        route
    }

    #[test]
    fn add_and_replace_by_id() {
        let mut route = route();
        assert_eq!(route.len(), 3);

        let replaced = route.add_flight(flight(2, 10.0, 180, "Tue 08:00")).unwrap();
        assert!(!replaced);
        assert_eq!(route.len(), 3);
        assert_eq!(route.flight(&FlightId::new("AR", 2).unwrap()).unwrap().price(), 10.0);
    }

    #[test]
    fn rejects_flight_for_other_route() {
        let mut route = Route::new(code("EZE"), code("MDZ"));
        let err = route.add_flight(flight(1, 1.0, 60, "Mon 08:00")).unwrap_err();
        assert!(matches!(err, NetworkError::FlightRouteMismatch { .. }));
        assert!(route.is_empty());
    }

    #[test]
    fn remove_by_id() {
        let mut route = route();
        let id = FlightId::new("AR", 1).unwrap();
        assert!(route.remove_flight(&id).is_some());
        assert!(route.remove_flight(&id).is_none());
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn cheapest_and_quickest_unrestricted() {
        let route = route();
        assert_eq!(route.cheapest(None).unwrap().id().number(), 2);
        assert_eq!(route.quickest(None).unwrap().id().number(), 3);
    }

    #[test]
    fn selection_respects_days() {
        let route = route();
        let weekend = DaySet::parse("Sat,Sun").unwrap();
        assert_eq!(route.cheapest(Some(&weekend)).unwrap().id().number(), 3);

        let monday = DaySet::parse("Mon").unwrap();
        assert_eq!(route.quickest(Some(&monday)).unwrap().id().number(), 1);

        let friday = DaySet::parse("Fri").unwrap();
        assert!(!route.has_flight(Some(&friday)));
        assert!(route.cheapest(Some(&friday)).is_none());
        assert!(route.has_flight(None));
    }

    #[test]
    fn selection_outlives_day_set() {
        let route = route();
        let (cheapest, quickest) = {
            let monday = DaySet::parse("Mon").unwrap();
            (route.cheapest(Some(&monday)), route.quickest(Some(&monday)))
        };
        assert_eq!(cheapest.unwrap().id().number(), 1);
        assert_eq!(quickest.unwrap().id().number(), 1);
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let mut route = Route::new(code("EZE"), code("BRC"));
        route.add_flight(flight(9, 100.0, 60, "Mon 08:00")).unwrap();
        route.add_flight(flight(4, 100.0, 60, "Mon 09:00")).unwrap();
        assert_eq!(route.cheapest(None).unwrap().id().number(), 4);
        assert_eq!(route.quickest(None).unwrap().id().number(), 4);
    }

    #[test]
    fn empty_route_has_no_flights() {
        let route = Route::new(code("EZE"), code("BRC"));
        assert!(!route.has_flight(None));
        assert!(route.cheapest(None).is_none());
        assert!(route.quickest(None).is_none());
    }
}
