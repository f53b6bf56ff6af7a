//! Per-query search state.
//!
//! Every [`PathFinder`](super::PathFinder) query owns a fresh context, so the
//! network itself is only ever borrowed immutably and never needs resetting
//! between queries.

use std::collections::HashMap;

use crate::domain::AirportCode;
use crate::network::FlightNetwork;

use super::weighter::Ticket;

#[derive(Debug, Clone, Copy)]
struct VertexState<'a> {
    visited: bool,
    distance: f64,
    /// The ticket that achieved `distance`.
    incident: Option<Ticket<'a>>,
}

impl Default for VertexState<'_> {
    fn default() -> Self {
        Self {
            visited: false,
            distance: f64::INFINITY,
            incident: None,
        }
    }
}

/// Visited flags, best distances and incoming tickets for one search.
#[derive(Debug, Clone, Default)]
pub struct SearchContext<'a> {
    states: HashMap<AirportCode, VertexState<'a>>,
}

impl<'a> SearchContext<'a> {
    /// Every airport unvisited at infinite distance.
    pub fn new(network: &FlightNetwork) -> Self {
        let states = network
            .airports()
            .map(|a| (a.code(), VertexState::default()))
            .collect();
        Self { states }
    }

    /// Best known distance; infinite for airports not yet reached.
    pub fn distance(&self, code: &AirportCode) -> f64 {
        self.states
            .get(code)
            .map_or(f64::INFINITY, |s| s.distance)
    }

    pub fn is_visited(&self, code: &AirportCode) -> bool {
        self.states.get(code).is_some_and(|s| s.visited)
    }

    pub fn mark_visited(&mut self, code: AirportCode) {
        self.states.entry(code).or_default().visited = true;
    }

    /// Marks `code` as the search source.
    pub fn set_source(&mut self, code: AirportCode) {
        let state = self.states.entry(code).or_default();
        state.distance = 0.0;
        state.incident = None;
    }

    /// Records that `ticket` reaches its destination at `distance`.
    pub fn relax(&mut self, ticket: Ticket<'a>, distance: f64) {
        let state = self.states.entry(ticket.destination()).or_default();
        state.distance = distance;
        state.incident = Some(ticket);
    }

    pub fn incident(&self, code: &AirportCode) -> Option<Ticket<'a>> {
        self.states.get(code).and_then(|s| s.incident)
    }

    /// Tickets from the source to `destination`, in travel order.
    ///
    /// Empty when `destination` is the source or was never reached.
    pub fn tickets_to(&self, destination: &AirportCode) -> Vec<Ticket<'a>> {
        let mut tickets = Vec::new();
        let mut current = *destination;
        while let Some(ticket) = self.incident(&current) {
            // A cycle here would mean a corrupted context
            if tickets.len() > self.states.len() {
                break;
            }
            tickets.push(ticket);
            current = ticket.origin();
        }
        tickets.reverse();
        tickets
    }
}
