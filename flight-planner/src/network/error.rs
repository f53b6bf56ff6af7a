//! Network mutation errors.
//!
//! These are precondition violations reported by the graph builder: the
//! caller asked for a mutation the current network cannot accept. They never
//! leave the network in a partially updated state.

use crate::domain::{AirportCode, FlightId};

/// Errors from building or editing a [`FlightNetwork`](super::FlightNetwork).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Airport is not part of the network
    #[error("unknown airport {0}")]
    UnknownAirport(AirportCode),

    /// Airport code is already taken
    #[error("airport {0} already exists")]
    DuplicateAirport(AirportCode),

    /// No route was declared between the two airports
    #[error("no route declared from {origin} to {destination}")]
    NoRoute {
        origin: AirportCode,
        destination: AirportCode,
    },

    /// Routes must connect two different airports
    #[error("a route cannot start and end at {0}")]
    SelfRoute(AirportCode),

    /// Flight is not on the given route
    #[error("no flight {id} from {origin} to {destination}")]
    UnknownFlight {
        id: FlightId,
        origin: AirportCode,
        destination: AirportCode,
    },

    /// Flight endpoints differ from the route it was added to
    #[error("flight {id} does not fly {origin} to {destination}")]
    FlightRouteMismatch {
        id: FlightId,
        origin: AirportCode,
        destination: AirportCode,
    },
}
