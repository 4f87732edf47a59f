//! End-to-end tests of the public surface: normalized records in, dashboard
//! report out, exercising the same flow a dashboard frontend drives.

use chrono::NaiveDate;
use currency_rust::api::DashboardReport;
use currency_rust::core::domain::{CurrencyParams, FlightRecord, FlightTime, TermRange};
use currency_rust::services::build_dashboard_report;
use currency_rust::transformations::{distinct_categories, FilterConfig};
use currency_rust::CurrencyError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn flight(
    pilot: &str,
    y: i32,
    m: u32,
    d: u32,
    hours: i64,
    minutes: i64,
    aircraft: &str,
    flight_type: &str,
) -> FlightRecord {
    FlightRecord {
        pilot_id: pilot.to_string(),
        flight_date: date(y, m, d).and_hms_opt(11, 45, 0).unwrap(),
        duration: FlightTime::from_hm(hours, minutes),
        aircraft_type: aircraft.to_string(),
        flight_type: flight_type.to_string(),
        landing_type: "Runway".to_string(),
    }
}

fn fleet_records() -> Vec<FlightRecord> {
    vec![
        flight("ANDERS", 2024, 1, 15, 10, 0, "EC135", "HEMS"),
        flight("ANDERS", 2024, 2, 20, 8, 0, "EC135", "HEMS"),
        flight("BERG", 2024, 2, 5, 3, 30, "EC145", "Training"),
        flight("BERG", 2024, 2, 25, 2, 15, "EC135", "HEMS"),
        flight("CONRAD", 2023, 10, 1, 20, 0, "AW139", "Offshore"),
    ]
}

#[test]
fn dashboard_flow_matches_hand_computed_results() {
    let records = fleet_records();
    let range = TermRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
    let params = CurrencyParams::new(date(2024, 3, 1), 60, 15.0).unwrap();

    let report = build_dashboard_report(&records, &FilterConfig::all(), &range, &params);

    // Term table: CONRAD's flying predates the term and is omitted.
    assert_eq!(report.term_totals.len(), 2);
    assert_eq!(report.term_totals[0].pilot_id, "ANDERS");
    assert_eq!(report.term_totals[0].formatted, "18:00");
    assert_eq!(report.term_totals[1].pilot_id, "BERG");
    assert_eq!(report.term_totals[1].formatted, "5:45");

    // Currency table: every pilot in the set has a row.
    assert_eq!(report.compliance.len(), 3);

    let anders = report.compliance_for("ANDERS").unwrap();
    assert_eq!(anders.window_total_hours, 18.0);
    assert_eq!(anders.expiration, "2024-03-15");
    assert_eq!(anders.hours_at_expiration, 3.0);

    let berg = report.compliance_for("BERG").unwrap();
    assert_eq!(berg.window_total_formatted, "5:45");
    assert_eq!(berg.expiration, "2024-03-01");
    assert_eq!(berg.hours_at_expiration, -9.25);

    let conrad = report.compliance_for("CONRAD").unwrap();
    assert_eq!(conrad.window_total_hours, 0.0);
    assert_eq!(conrad.expiration, "2024-03-01");
    assert_eq!(conrad.last_flight_date.date(), date(2023, 10, 1));
}

#[test]
fn category_options_drive_filtered_reports() {
    let records = fleet_records();
    let options = distinct_categories(&records);
    assert_eq!(options.aircraft_types, vec!["AW139", "EC135", "EC145"]);

    let range = TermRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
    let params = CurrencyParams::new(date(2024, 3, 1), 60, 5.0).unwrap();

    // Selecting one option from the listed categories, as the frontend's
    // multiselect would.
    let filter = FilterConfig::all().with_aircraft_types([options.aircraft_types[1].clone()]);
    let report = build_dashboard_report(&records, &filter, &range, &params);

    assert!(report.compliance_for("CONRAD").is_none());
    let berg = report.compliance_for("BERG").unwrap();
    // Only BERG's EC135 leg remains in the window.
    assert_eq!(berg.window_total_formatted, "2:15");
}

#[test]
fn report_json_survives_round_trip() {
    let records = fleet_records();
    let range = TermRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
    let params = CurrencyParams::new(date(2024, 3, 1), 60, 15.0).unwrap();

    let report = build_dashboard_report(&records, &FilterConfig::all(), &range, &params);
    let json = report.to_json().unwrap();
    let parsed: DashboardReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);
    assert!(json.contains("\"expiration\":\"2024-03-15\""));
}

#[test]
fn boundary_validation_rejects_bad_parameters() {
    let err = TermRange::new(date(2024, 3, 1), date(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, CurrencyError::InvalidDateRange { .. }));

    assert!(CurrencyParams::new(date(2024, 3, 1), 0, 15.0).is_err());
    assert!(CurrencyParams::new(date(2024, 3, 1), 60, -0.5).is_err());
}
