//! Shortest-itinerary search.
//!
//! A Dijkstra search over airports, driven by a [`BinaryMinHeap`] of airport
//! codes. Each route contributes one weighted edge, chosen by a [`Weighter`].
//!
//! An optional [`FirstHop`] runs exactly one expansion of the origin with its
//! own weighter and an allowed set of departure days before the uniform loop
//! takes over; only the first flight of the itinerary is day-restricted.

use tracing::{debug, trace};

use crate::collections::BinaryMinHeap;
use crate::domain::{AirportCode, DaySet};
use crate::network::{Airport, FlightNetwork};

use super::context::SearchContext;
use super::weighter::{Ticket, Weighter};

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not in the network
    #[error("unknown airport {0}")]
    UnknownAirport(AirportCode),
}

/// Restriction applied to the first flight of an itinerary.
#[derive(Clone, Copy)]
pub struct FirstHop<'w> {
    pub weighter: &'w dyn Weighter,
    /// Days the first flight may depart on.
    pub days: DaySet,
}

impl<'w> FirstHop<'w> {
    pub fn new(weighter: &'w dyn Weighter, days: DaySet) -> Self {
        Self { weighter, days }
    }
}

/// An ordered path from origin to destination.
///
/// Empty when the destination cannot be reached. A single airport with no
/// tickets when origin and destination coincide.
#[derive(Debug, Clone, Default)]
pub struct Itinerary<'a> {
    airports: Vec<&'a Airport>,
    tickets: Vec<Ticket<'a>>,
    total_weight: f64,
}

impl<'a> Itinerary<'a> {
    /// The itinerary of an unreachable destination.
    pub fn empty() -> Self {
        Self::default()
    }

    fn single(airport: &'a Airport) -> Self {
        Self {
            airports: vec![airport],
            tickets: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Airports in travel order, origin and destination included.
    pub fn airports(&self) -> &[&'a Airport] {
        &self.airports
    }

    pub fn codes(&self) -> Vec<AirportCode> {
        self.airports.iter().map(|a| a.code()).collect()
    }

    /// The flight taken on each hop, in travel order.
    pub fn tickets(&self) -> &[Ticket<'a>] {
        &self.tickets
    }

    /// Sum of the weights of every hop; zero for empty itineraries.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn hops(&self) -> usize {
        self.tickets.len()
    }
}

/// Outcome of expanding one airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Expanded,
    Found,
    Unreachable,
}

/// Finds minimum-weight itineraries over a borrowed network.
///
/// All search state lives in a per-call [`SearchContext`], so any number of
/// queries may share one network.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    network: &'a FlightNetwork,
}

impl<'a> PathFinder<'a> {
    pub fn new(network: &'a FlightNetwork) -> Self {
        Self { network }
    }

    /// Find the minimum-weight itinerary from `origin` to `destination`.
    ///
    /// Returns an empty itinerary when the destination is unreachable, and an
    /// error only when either airport is not in the network.
    pub fn find_path(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        weighter: &dyn Weighter,
        first_hop: Option<FirstHop<'_>>,
    ) -> Result<Itinerary<'a>, SearchError> {
        let source = self.airport(origin)?;
        self.airport(destination)?;

        debug!(
            %origin,
            %destination,
            first_hop = first_hop.is_some(),
            "Finding path"
        );

        if origin == destination {
            return Ok(Itinerary::single(source));
        }

        let mut ctx = SearchContext::new(self.network);
        let mut queue = BinaryMinHeap::with_capacity(self.network.len());
        for airport in self.network.airports() {
            let priority = if airport.code() == *origin {
                0.0
            } else {
                f64::INFINITY
            };
            queue.enqueue(airport.code(), priority);
        }
        ctx.set_source(*origin);

        let mut outcome = Step::Expanded;
        if let Some(hop) = &first_hop {
            debug!(days = %hop.days, "Restricting first hop");
            outcome = self.step(&mut queue, &mut ctx, destination, hop.weighter, Some(&hop.days));
        }
        while outcome == Step::Expanded {
            outcome = self.step(&mut queue, &mut ctx, destination, weighter, None);
        }

        if outcome == Step::Unreachable {
            debug!(%origin, %destination, "Destination unreachable");
            return Ok(Itinerary::empty());
        }

        let tickets = ctx.tickets_to(destination);
        let mut airports = Vec::with_capacity(tickets.len() + 1);
        airports.push(source);
        airports.extend(
            tickets
                .iter()
                .filter_map(|t| self.network.airport(&t.destination())),
        );
        let total_weight = ctx.distance(destination);

        debug!(
            %origin,
            %destination,
            hops = tickets.len(),
            total_weight,
            "Found path"
        );

        Ok(Itinerary {
            airports,
            tickets,
            total_weight,
        })
    }

    fn airport(&self, code: &AirportCode) -> Result<&'a Airport, SearchError> {
        self.network
            .airport(code)
            .ok_or(SearchError::UnknownAirport(*code))
    }

    /// Dequeue the closest unvisited airport and relax its routes.
    ///
    /// With `days` set only flights departing on those days are considered.
    fn step(
        &self,
        queue: &mut BinaryMinHeap<AirportCode>,
        ctx: &mut SearchContext<'a>,
        destination: &AirportCode,
        weighter: &dyn Weighter,
        days: Option<&DaySet>,
    ) -> Step {
        let Some((code, distance)) = queue.dequeue() else {
            return Step::Unreachable;
        };
        // Everything left is disconnected from the origin
        if distance == f64::INFINITY {
            return Step::Unreachable;
        }
        ctx.mark_visited(code);
        if code == *destination {
            return Step::Found;
        }
        let Some(airport) = self.network.airport(&code) else {
            return Step::Expanded;
        };

        trace!(airport = %code, distance, "Expanding airport");

        for route in airport.routes() {
            let next = route.destination();
            if ctx.is_visited(&next) || !route.has_flight(days) {
                continue;
            }
            let Some(weighted) = weighter.min_ticket(route, days) else {
                continue;
            };
            let current = ctx.distance(&next);
            let candidate = distance + weighted.weight;
            if candidate < current {
                trace!(
                    airport = %next,
                    flight = %weighted.ticket.flight().id(),
                    from = current,
                    to = candidate,
                    "Relaxed"
                );
                let lowered = queue.decrease_priority(&next, current, candidate);
                debug_assert!(lowered, "{next} missing from queue at distance {current}");
                ctx.relax(weighted.ticket, candidate);
            }
        }
        Step::Expanded
    }
}
