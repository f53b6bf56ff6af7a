//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::FlightNetwork;

/// Shared application state.
///
/// Searches hold the read lock for their whole run, so a network edit never
/// lands in the middle of a search.
#[derive(Clone, Default)]
pub struct AppState {
    pub network: Arc<RwLock<FlightNetwork>>,
}

impl AppState {
    pub fn new(network: FlightNetwork) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
