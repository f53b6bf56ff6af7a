//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{AirportCode, DaySet, FlightId, parse_weekday};
use crate::network::{AirportRecord, FlightRecord, NetworkError, NetworkFile, RecordError, RouteRecord};
use crate::planner::{CriterionWeighter, FirstHop, PathFinder, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(export_network))
        .route("/airports", get(list_airports).post(create_airport))
        .route("/airports/:code", delete(delete_airport))
        .route("/routes", post(create_route))
        .route("/routes/:origin/:destination", delete(delete_route))
        .route("/flights", post(create_flight))
        .route(
            "/flights/:origin/:destination/:airline/:number",
            delete(delete_flight),
        )
        .route("/itinerary", post(plan_itinerary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The whole network in network file form.
async fn export_network(State(state): State<AppState>) -> Json<NetworkFile> {
    let network = state.network.read().await;
    Json(NetworkFile::from_network(&network))
}

async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    let network = state.network.read().await;
    let airports = network
        .airports()
        .map(AirportSummary::from_airport)
        .collect();
    Json(AirportsResponse { airports })
}

async fn create_airport(
    State(state): State<AppState>,
    Json(record): Json<AirportRecord>,
) -> Result<(StatusCode, Json<AirportSummary>), AppError> {
    let (code, coordinates) = record.parse()?;
    state
        .network
        .write()
        .await
        .add_airport(code, coordinates)?;

    let summary = AirportSummary {
        code: code.to_string(),
        latitude: coordinates.latitude(),
        longitude: coordinates.longitude(),
        destinations: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(summary)))
}

async fn delete_airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    let code = parse_code(&code)?;
    state.network.write().await.remove_airport(&code)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_route(
    State(state): State<AppState>,
    Json(record): Json<RouteRecord>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let (origin, destination) = record.parse()?;
    let created = state
        .network
        .write()
        .await
        .add_route(origin, destination)?;
    Ok((created_status(created), Json(CreatedResponse { created })))
}

async fn delete_route(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let origin = parse_code(&origin)?;
    let destination = parse_code(&destination)?;
    state
        .network
        .write()
        .await
        .remove_route(&origin, &destination)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a flight, replacing any flight with the same id on its route.
async fn create_flight(
    State(state): State<AppState>,
    Json(record): Json<FlightRecord>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let flight = record.parse()?;
    let created = state.network.write().await.add_flight(flight)?;
    Ok((created_status(created), Json(CreatedResponse { created })))
}

async fn delete_flight(
    State(state): State<AppState>,
    Path((origin, destination, airline, number)): Path<(String, String, String, i64)>,
) -> Result<StatusCode, AppError> {
    let origin = parse_code(&origin)?;
    let destination = parse_code(&destination)?;
    let id = FlightId::from_signed(airline, number).map_err(RecordError::from)?;
    state
        .network
        .write()
        .await
        .remove_flight(&origin, &destination, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Plan the cheapest or quickest itinerary.
///
/// An unreachable destination is not an error; the response simply lists
/// no airports.
async fn plan_itinerary(
    State(state): State<AppState>,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let origin = parse_code(&req.origin)?;
    let destination = parse_code(&req.destination)?;
    let days = req
        .days
        .as_ref()
        .map(|names| {
            names
                .iter()
                .map(|name| parse_weekday(name))
                .collect::<Result<DaySet, _>>()
        })
        .transpose()
        .map_err(RecordError::from)?;

    let network = state.network.read().await;
    let weighter = CriterionWeighter::new(req.criterion);
    let first_hop = days.map(|days| FirstHop::new(&weighter, days));
    let itinerary =
        PathFinder::new(&network).find_path(&origin, &destination, &weighter, first_hop)?;

    Ok(Json(ItineraryResponse::from_itinerary(
        &itinerary,
        req.criterion,
    )))
}

fn parse_code(s: &str) -> Result<AirportCode, AppError> {
    AirportCode::parse_normalized(s).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {s:?}"),
    })
}

fn created_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<RecordError> for AppError {
    fn from(e: RecordError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::UnknownAirport(_)
            | NetworkError::NoRoute { .. }
            | NetworkError::UnknownFlight { .. } => AppError::NotFound { message },
            NetworkError::DuplicateAirport(_) => AppError::Conflict { message },
            NetworkError::SelfRoute(_) | NetworkError::FlightRouteMismatch { .. } => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownAirport(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
