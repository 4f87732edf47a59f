//! Domain models for flight records and currency windows.
//!
//! This module provides the core data structures that represent flight-log
//! entries, including qualifying flight time, reporting terms, and the
//! trailing rolling window used to assess ongoing currency.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CurrencyError, CurrencyResult};

/// Qualifying flight time with minute precision.
///
/// A `FlightTime` is a non-negative duration stored as whole minutes, which
/// keeps all threshold arithmetic exact: sums and subtractions of logged
/// "H:MM" values never accumulate floating-point error.
///
/// # Examples
///
/// ```
/// use currency_rust::core::domain::FlightTime;
///
/// let time = FlightTime::from_hm(1, 30);
///
/// assert_eq!(time.as_minutes(), 90);
/// assert_eq!(time.hours_decimal(), 1.5);
/// assert_eq!(time.format_hm(), "1:30");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FlightTime(i64);

impl FlightTime {
    /// A zero-length flight time.
    pub const ZERO: FlightTime = FlightTime(0);

    /// Creates a flight time from whole minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use currency_rust::core::domain::FlightTime;
    ///
    /// assert_eq!(FlightTime::from_minutes(90), FlightTime::from_hm(1, 30));
    /// ```
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Creates a flight time from an hours and minutes pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use currency_rust::core::domain::FlightTime;
    ///
    /// let time = FlightTime::from_hm(12, 5);
    /// assert_eq!(time.as_minutes(), 725);
    /// ```
    pub fn from_hm(hours: i64, minutes: i64) -> Self {
        Self(hours * 60 + minutes)
    }

    /// Returns the total number of minutes.
    pub fn as_minutes(&self) -> i64 {
        self.0
    }

    /// Returns the duration in decimal hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use currency_rust::core::domain::FlightTime;
    ///
    /// assert_eq!(FlightTime::from_hm(2, 45).hours_decimal(), 2.75);
    /// ```
    pub fn hours_decimal(&self) -> f64 {
        self.0 as f64 / 60.0
    }

    /// Formats the duration as "H:MM" with zero-padded minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use currency_rust::core::domain::FlightTime;
    ///
    /// assert_eq!(FlightTime::from_hm(26, 5).format_hm(), "26:05");
    /// assert_eq!(FlightTime::ZERO.format_hm(), "0:00");
    /// ```
    pub fn format_hm(&self) -> String {
        format!("{}:{:02}", self.0 / 60, self.0 % 60)
    }

    /// Returns `true` for a zero-length duration.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for FlightTime {
    type Output = FlightTime;

    fn add(self, rhs: FlightTime) -> FlightTime {
        FlightTime(self.0 + rhs.0)
    }
}

impl AddAssign for FlightTime {
    fn add_assign(&mut self, rhs: FlightTime) {
        self.0 += rhs.0;
    }
}

impl Sub for FlightTime {
    type Output = FlightTime;

    fn sub(self, rhs: FlightTime) -> FlightTime {
        FlightTime(self.0 - rhs.0)
    }
}

impl Sum for FlightTime {
    fn sum<I: Iterator<Item = FlightTime>>(iter: I) -> FlightTime {
        iter.fold(FlightTime::ZERO, |acc, t| acc + t)
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_hm())
    }
}

/// One crew member's participation in one flight leg.
///
/// Records arrive already normalized from the loading layer: `flight_date`
/// is a valid timestamp (rows that failed to parse were dropped upstream)
/// and `duration` is non-negative (unparseable times arrive as zero, which
/// is a valid zero rather than missing data). Records are not assumed to be
/// sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Pilot identifier; many records share one pilot.
    pub pilot_id: String,
    /// Timestamp of the flight leg.
    pub flight_date: NaiveDateTime,
    /// Qualifying flight time counted toward currency.
    pub duration: FlightTime,
    /// Aircraft type, used only for filtering.
    pub aircraft_type: String,
    /// Flight type, used only for filtering.
    pub flight_type: String,
    /// Landing type, used only for filtering.
    pub landing_type: String,
}

/// Inclusive reporting date range over which term totals are summed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use currency_rust::core::domain::TermRange;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// let range = TermRange::new(start, end).unwrap();
///
/// assert!(range.contains(start));
/// assert!(range.contains(end));
///
/// // Reversed bounds are rejected at the boundary.
/// assert!(TermRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TermRange {
    /// Creates a reporting range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CurrencyResult<Self> {
        if start > end {
            return Err(CurrencyError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` falls inside the range, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Trailing rolling window of fixed length ending at a reference date.
///
/// The window covers `(reference_date - window_days, reference_date]`:
/// strictly greater-than on the lower bound, inclusive on the upper. A
/// flight flown exactly `window_days` days before the reference date is
/// outside the window.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use currency_rust::core::domain::RollingWindow;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let window = RollingWindow::new(reference, 60);
///
/// // Exactly 60 days old: out. 59 days old: in.
/// assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
/// assert!(window.contains(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
/// assert!(window.contains(reference));
///
/// // A flight flown on Jan 15 leaves the window on Mar 15.
/// let flown = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(
///     window.expiry_of(flown),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingWindow {
    reference_date: NaiveDate,
    window_days: u32,
}

impl RollingWindow {
    pub fn new(reference_date: NaiveDate, window_days: u32) -> Self {
        Self {
            reference_date,
            window_days,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Exclusive lower bound of the window.
    pub fn window_start(&self) -> NaiveDate {
        self.reference_date - Duration::days(self.window_days as i64)
    }

    /// Returns `true` if `date` lies inside `(start, reference_date]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.window_start() && date <= self.reference_date
    }

    /// The first date on which a flight flown on `date` is outside a window
    /// of this length, i.e. the date it ages out.
    pub fn expiry_of(&self, date: NaiveDate) -> NaiveDate {
        date + Duration::days(self.window_days as i64)
    }
}

/// Projected end of a pilot's rolling-window compliance.
///
/// `Never` means no expiration is projectable from the flights currently
/// logged: as those flights age out, the running total never drops below
/// the minimum before the last expiration event has fired. It does not
/// assert permanent compliance; flights logged later can change the
/// projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expiration {
    /// Currency lapses on this date. A pilot already below the minimum at
    /// the reference date carries the reference date itself.
    Date(NaiveDate),
    /// No threshold crossing among the known expiration events.
    Never,
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiration::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Expiration::Never => f.write_str("never"),
        }
    }
}

/// Parameters of the rolling-currency computation.
///
/// Validated at construction: `window_days` must be positive and
/// `minimum_hours` non-negative and finite. The minimum is converted to
/// whole minutes once, so the engine compares totals exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyParams {
    reference_date: NaiveDate,
    window_days: u32,
    minimum_hours: f64,
}

impl CurrencyParams {
    pub fn new(
        reference_date: NaiveDate,
        window_days: u32,
        minimum_hours: f64,
    ) -> CurrencyResult<Self> {
        if window_days == 0 {
            return Err(CurrencyError::InvalidParameters(
                "window_days must be positive".to_string(),
            ));
        }
        if !minimum_hours.is_finite() || minimum_hours < 0.0 {
            return Err(CurrencyError::InvalidParameters(format!(
                "minimum_hours must be non-negative, got {minimum_hours}"
            )));
        }
        Ok(Self {
            reference_date,
            window_days,
            minimum_hours,
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn minimum_hours(&self) -> f64 {
        self.minimum_hours
    }

    /// The minimum expressed as exact minutes.
    pub fn minimum_time(&self) -> FlightTime {
        FlightTime::from_minutes((self.minimum_hours * 60.0).round() as i64)
    }

    /// The rolling window these parameters describe.
    pub fn window(&self) -> RollingWindow {
        RollingWindow::new(self.reference_date, self.window_days)
    }
}
