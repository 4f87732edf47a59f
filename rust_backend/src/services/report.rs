//! Dashboard report orchestration.
//!
//! Assembles one complete dashboard view from a normalized record set:
//! applies the frontend's filter selections, runs the Term Aggregator and
//! the Rolling Compliance Engine, and converts everything to DTOs.

use log::{debug, warn};

use crate::api::types::DashboardReport;
use crate::core::domain::{CurrencyParams, FlightRecord, TermRange};
use crate::services::{currency, term};
use crate::transformations::FilterConfig;

/// Builds the dashboard report for one parameter selection.
///
/// `range` and `params` are validated at construction, so the computation
/// itself is total: an empty (or fully filtered-out) record set produces an
/// empty report rather than an error. Derived results are recomputed from
/// scratch on every call; nothing is cached across parameter changes.
pub fn build_dashboard_report(
    records: &[FlightRecord],
    filter: &FilterConfig,
    range: &TermRange,
    params: &CurrencyParams,
) -> DashboardReport {
    let filtered = filter.apply(records);
    debug!(
        "building dashboard report: {} of {} records after filtering",
        filtered.len(),
        records.len()
    );
    if filtered.is_empty() && !records.is_empty() {
        warn!("filter selection matches no records");
    }

    let data_start = filtered.iter().map(|r| r.flight_date).min();
    let data_end = filtered.iter().map(|r| r.flight_date).max();

    let term_totals = term::compute_term_totals(&filtered, range)
        .into_iter()
        .map(Into::into)
        .collect();
    let compliance = currency::compute_compliance(&filtered, params)
        .into_iter()
        .map(Into::into)
        .collect();

    DashboardReport {
        data_start,
        data_end,
        term_totals,
        compliance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::FlightTime;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flight(pilot: &str, y: i32, m: u32, d: u32, minutes: i64, aircraft: &str) -> FlightRecord {
        FlightRecord {
            pilot_id: pilot.to_string(),
            flight_date: date(y, m, d).and_hms_opt(8, 15, 0).unwrap(),
            duration: FlightTime::from_minutes(minutes),
            aircraft_type: aircraft.to_string(),
            flight_type: "HEMS".to_string(),
            landing_type: "Runway".to_string(),
        }
    }

    fn sample_records() -> Vec<FlightRecord> {
        vec![
            flight("P1", 2024, 1, 15, 600, "EC135"),
            flight("P1", 2024, 2, 20, 480, "EC135"),
            flight("P2", 2024, 2, 10, 120, "AW139"),
        ]
    }

    #[test]
    fn test_full_report() {
        let records = sample_records();
        let range = TermRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
        let params = CurrencyParams::new(date(2024, 3, 1), 60, 15.0).unwrap();

        let report = build_dashboard_report(&records, &FilterConfig::all(), &range, &params);

        assert_eq!(report.data_start.unwrap().date(), date(2024, 1, 15));
        assert_eq!(report.data_end.unwrap().date(), date(2024, 2, 20));

        let p1_term = report.term_total_for("P1").unwrap();
        assert_eq!(p1_term.hours, 18.0);
        assert_eq!(p1_term.formatted, "18:00");

        let p1 = report.compliance_for("P1").unwrap();
        assert_eq!(p1.expiration, "2024-03-15");
        assert_eq!(p1.hours_at_expiration, 3.0);

        // P2 is below the 15 h minimum: expired as of the reference date.
        let p2 = report.compliance_for("P2").unwrap();
        assert_eq!(p2.expiration, "2024-03-01");
        assert_eq!(p2.hours_at_expiration, -13.0);
    }

    #[test]
    fn test_filter_restricts_both_tables() {
        let records = sample_records();
        let range = TermRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
        let params = CurrencyParams::new(date(2024, 3, 1), 60, 15.0).unwrap();

        let filter = FilterConfig::all().with_aircraft_types(["AW139"]);
        let report = build_dashboard_report(&records, &filter, &range, &params);

        assert!(report.term_total_for("P1").is_none());
        assert!(report.compliance_for("P1").is_none());
        assert!(report.compliance_for("P2").is_some());
        assert_eq!(report.data_start.unwrap().date(), date(2024, 2, 10));
    }

    #[test]
    fn test_empty_set_produces_empty_report() {
        let range = TermRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
        let params = CurrencyParams::new(date(2024, 3, 1), 60, 15.0).unwrap();

        let report = build_dashboard_report(&[], &FilterConfig::all(), &range, &params);

        assert!(report.term_totals.is_empty());
        assert!(report.compliance.is_empty());
        assert!(report.data_start.is_none());
        assert!(report.data_end.is_none());
    }
}
