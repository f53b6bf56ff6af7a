//! Flight identifier type.

use std::fmt;

/// Error returned when building an invalid flight identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight id: {reason}")]
pub struct InvalidFlightId {
    reason: &'static str,
}

/// Identifies a scheduled flight: an airline name plus a flight number.
///
/// Identifiers order by airline name, then by number. Two flights are the
/// same flight exactly when their identifiers are equal.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::FlightId;
///
/// let id = FlightId::new("Aerolineas", 1130).unwrap();
/// assert_eq!(id.to_string(), "Aerolineas 1130");
///
/// let parsed = FlightId::parse("Aerolineas 1130").unwrap();
/// assert_eq!(parsed, id);
///
/// // Blank airlines and negative numbers are rejected
/// assert!(FlightId::new("  ", 1).is_err());
/// assert!(FlightId::parse("Aerolineas -4").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightId {
    airline: String,
    number: u32,
}

impl FlightId {
    /// Create a flight identifier.
    ///
    /// The airline name must contain at least one non-whitespace character.
    pub fn new(airline: impl Into<String>, number: u32) -> Result<Self, InvalidFlightId> {
        let airline = airline.into();
        if airline.trim().is_empty() {
            return Err(InvalidFlightId {
                reason: "airline cannot be empty",
            });
        }
        Ok(Self { airline, number })
    }

    /// Create a flight identifier from a signed number, as found in
    /// external input.
    pub fn from_signed(airline: impl Into<String>, number: i64) -> Result<Self, InvalidFlightId> {
        let number = u32::try_from(number).map_err(|_| InvalidFlightId {
            reason: "flight number must be between 0 and 4294967295",
        })?;
        Self::new(airline, number)
    }

    /// Parse `"<airline> <number>"`; the airline may itself contain spaces.
    pub fn parse(s: &str) -> Result<Self, InvalidFlightId> {
        let s = s.trim();
        let (airline, number) = s.rsplit_once(' ').ok_or(InvalidFlightId {
            reason: "expected \"<airline> <number>\"",
        })?;
        let number: i64 = number.parse().map_err(|_| InvalidFlightId {
            reason: "flight number must be an integer",
        })?;
        Self::from_signed(airline.trim_end(), number)
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Debug for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightId({} {})", self.airline, self.number)
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.airline, self.number)
    }
}
