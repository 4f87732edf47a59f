//! Rolling Compliance Engine: trailing-window totals and projected
//! expiration dates.
//!
//! For each pilot the engine sums qualifying time inside the trailing
//! window `(reference_date - window_days, reference_date]`, then simulates
//! forward aging: a flight flown on date `d` leaves the window on
//! `d + window_days`. Flights sharing an exit date are merged into a single
//! expiration event, and events are replayed in ascending date order until
//! the running total first drops below the configured minimum. A pilot with
//! no crossing among the known events reports [`Expiration::Never`].

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::domain::{CurrencyParams, Expiration, FlightRecord, FlightTime, RollingWindow};

/// Rolling-window compliance of one pilot as of the reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotCompliance {
    pub pilot_id: String,
    /// Most recent flight among the pilot's records in the filtered set.
    pub last_flight: NaiveDateTime,
    /// Qualifying time inside the rolling window.
    pub window_total: FlightTime,
    /// Projected end of compliance; the reference date itself when the
    /// pilot is already below the minimum.
    pub expiration: Expiration,
    /// Surplus (or deficit, negative) over the minimum at the reference
    /// date, in minutes. A "cushion now" metric, not the balance at the
    /// expiration date.
    pub cushion_minutes: i64,
}

impl PilotCompliance {
    /// The cushion expressed in decimal hours.
    pub fn cushion_hours(&self) -> f64 {
        self.cushion_minutes as f64 / 60.0
    }
}

/// Computes rolling-window compliance for every pilot in `records`.
///
/// Every pilot present in the record set gets exactly one row, sorted by
/// pilot id; pilots absent from the set have no row at all. The computation
/// per pilot is independent and side-effect-free.
pub fn compute_compliance(
    records: &[FlightRecord],
    params: &CurrencyParams,
) -> Vec<PilotCompliance> {
    let mut by_pilot: HashMap<&str, Vec<&FlightRecord>> = HashMap::new();
    for record in records {
        by_pilot.entry(record.pilot_id.as_str()).or_default().push(record);
    }

    let mut result: Vec<PilotCompliance> = by_pilot
        .into_iter()
        .filter_map(|(pilot_id, flights)| pilot_compliance(pilot_id, &flights, params))
        .collect();

    result.sort_by(|a, b| a.pilot_id.cmp(&b.pilot_id));
    result
}

/// Computes compliance for a single pilot's flights.
///
/// Returns `None` for an empty flight list (a pilot must appear in the
/// filtered record set to have a result).
fn pilot_compliance(
    pilot_id: &str,
    flights: &[&FlightRecord],
    params: &CurrencyParams,
) -> Option<PilotCompliance> {
    let last_flight = flights.iter().map(|f| f.flight_date).max()?;

    let window = params.window();
    let in_window: Vec<(NaiveDate, FlightTime)> = flights
        .iter()
        .map(|f| (f.flight_date.date(), f.duration))
        .filter(|(date, _)| window.contains(*date))
        .collect();

    let window_total: FlightTime = in_window.iter().map(|(_, duration)| *duration).sum();
    let minimum = params.minimum_time();

    let expiration = if window_total < minimum {
        // Already below the minimum: currency has lapsed as of today.
        Expiration::Date(params.reference_date())
    } else {
        simulate_aging(&in_window, window_total, minimum, &window)
    };

    Some(PilotCompliance {
        pilot_id: pilot_id.to_string(),
        last_flight,
        window_total,
        expiration,
        cushion_minutes: (window_total - minimum).as_minutes(),
    })
}

/// Replays expiration events in date order and returns the first threshold
/// crossing, or `Never` if the running total stays at or above `minimum`
/// through the last event.
///
/// Flights exiting the window on the same date are merged into one event,
/// so the threshold check runs once per date, after the whole day's hours
/// are gone.
fn simulate_aging(
    in_window: &[(NaiveDate, FlightTime)],
    window_total: FlightTime,
    minimum: FlightTime,
    window: &RollingWindow,
) -> Expiration {
    let mut events: BTreeMap<NaiveDate, FlightTime> = BTreeMap::new();
    for (date, duration) in in_window {
        *events.entry(window.expiry_of(*date)).or_default() += *duration;
    }

    let mut running = window_total;
    for (expiry_date, lost) in events {
        running = running - lost;
        if running < minimum {
            return Expiration::Date(expiry_date);
        }
    }

    Expiration::Never
}
