//! Web layer for the flight planner.
//!
//! A JSON API for editing the shared flight network and planning
//! itineraries over it.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
