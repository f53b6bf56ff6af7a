//! Weekly schedule times.
//!
//! Flights run on a weekly timetable, so a departure is a day of the week
//! plus a time of day. Day restrictions on a search are sets of weekdays.

use chrono::{NaiveTime, Weekday};
use std::fmt;

/// Error returned when parsing an invalid departure or weekday.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a weekday name such as "Mon" or "monday".
pub fn parse_weekday(s: &str) -> Result<Weekday, TimeError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| TimeError::new("unknown weekday"))
}

/// A scheduled weekly departure.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Departure;
/// use chrono::Weekday;
///
/// let dep = Departure::parse("Tue 07:45").unwrap();
/// assert_eq!(dep.day(), Weekday::Tue);
/// assert_eq!(dep.to_string(), "Tue 07:45");
///
/// assert!(Departure::parse("Tue 7.45").is_err());
/// assert!(Departure::parse("Someday 07:45").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Departure {
    day: Weekday,
    time: NaiveTime,
}

impl Departure {
    pub fn new(day: Weekday, time: NaiveTime) -> Self {
        Self { day, time }
    }

    /// Parse `"<weekday> HH:MM"`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (day, time) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| TimeError::new("expected \"<weekday> HH:MM\""))?;
        let day = parse_weekday(day)?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| TimeError::new("expected HH:MM time of day"))?;
        Ok(Self { day, time })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Minutes since Monday 00:00.
    pub fn minute_of_week(&self) -> u32 {
        use chrono::Timelike;
        self.day.num_days_from_monday() * 24 * 60 + self.time.hour() * 60 + self.time.minute()
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time.format("%H:%M"))
    }
}

/// A set of weekdays.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

impl DaySet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Self(0b111_1111)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Returns `true` if the day was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let added = !self.contains(day);
        self.0 |= bit(day);
        added
    }

    pub fn remove(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.0 &= !bit(day);
        present
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in the set, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_DAYS.into_iter().filter(|d| self.contains(*d))
    }

    /// Parse a comma-separated list of weekday names, e.g. `"Mon,Wed"`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let mut set = Self::empty();
        for part in s.split(',').filter(|p| !p.trim().is_empty()) {
            set.insert(parse_weekday(part)?);
        }
        Ok(set)
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for day in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{day}")?;
            first = false;
        }
        Ok(())
    }
}
