//! Domain error types.
//!
//! These errors represent values rejected at construction time. Nothing that
//! fails these checks ever enters the flight network.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Price is negative, NaN or infinite
    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// Flight duration must be strictly positive
    #[error("invalid duration: {0} minutes")]
    InvalidDuration(i64),

    /// Latitude or longitude out of range
    #[error("invalid coordinates: ({0}, {1})")]
    InvalidCoordinates(f64, f64),

    /// Flight cannot depart and arrive at the same airport
    #[error("flight must connect two different airports")]
    SameOriginAndDestination,
}
