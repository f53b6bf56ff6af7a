//! Flight itinerary planner.
//!
//! Finds the cheapest or quickest sequence of flights between two airports,
//! optionally restricting the first flight to given departure days. The
//! network is held in hand-rolled ordered collections and searched with a
//! decrease-key binary heap.

pub mod collections;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
