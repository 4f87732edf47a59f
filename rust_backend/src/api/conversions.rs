//! Conversions from internal service results to frontend DTOs.

use crate::api::types::{ComplianceRow, TermTotal};
use crate::services::currency::PilotCompliance;
use crate::services::term::PilotTermTotal;

/// Rounds an hour value to two decimals for display.
pub(crate) fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

impl From<PilotTermTotal> for TermTotal {
    fn from(total: PilotTermTotal) -> Self {
        TermTotal {
            hours: round_hours(total.total.hours_decimal()),
            formatted: total.total.format_hm(),
            pilot_id: total.pilot_id,
        }
    }
}

impl From<PilotCompliance> for ComplianceRow {
    fn from(row: PilotCompliance) -> Self {
        ComplianceRow {
            last_flight_date: row.last_flight,
            window_total_hours: round_hours(row.window_total.hours_decimal()),
            window_total_formatted: row.window_total.format_hm(),
            expiration: row.expiration.to_string(),
            hours_at_expiration: round_hours(row.cushion_hours()),
            pilot_id: row.pilot_id,
        }
    }
}
