//! Itinerary planner.
//!
//! Answers "what is the cheapest (or quickest) way to fly from here to
//! there?" with a Dijkstra search over the flight network. The first flight
//! can optionally be restricted to a set of departure days.

mod context;
mod search;
mod weighter;


pub use context::SearchContext;
pub use search::{FirstHop, Itinerary, PathFinder, SearchError};
pub use weighter::{Criterion, CriterionWeighter, InvalidCriterion, Ticket, WeightedTicket, Weighter};
