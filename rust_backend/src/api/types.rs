//! Frontend-facing Data Transfer Objects (DTOs).
//!
//! These types use primitives and chrono values only so any rendering or
//! export layer can consume them directly (or as JSON via
//! [`DashboardReport::to_json`]). Hour values are rounded to two decimals
//! at this boundary; exact minute arithmetic stays internal.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Total qualifying time of one pilot within the reporting term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermTotal {
    pub pilot_id: String,
    /// Decimal hours, rounded to two decimals.
    pub hours: f64,
    /// The same total as "H:MM".
    pub formatted: String,
}

/// One pilot's rolling-window compliance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRow {
    pub pilot_id: String,
    /// Most recent flight in the filtered record set.
    pub last_flight_date: NaiveDateTime,
    /// Qualifying hours inside the rolling window, rounded to two decimals.
    pub window_total_hours: f64,
    /// The window total as "H:MM".
    pub window_total_formatted: String,
    /// ISO date on which currency lapses, or the sentinel `"never"`.
    /// Pilots already below the minimum carry the reference date.
    pub expiration: String,
    /// Surplus (negative: deficit) over the minimum as of the reference
    /// date, in decimal hours.
    pub hours_at_expiration: f64,
}

/// Everything one dashboard view renders: the term table, the currency
/// table, and the calendar bounds of the filtered data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Earliest flight in the filtered set, for the frontend's date pickers.
    pub data_start: Option<NaiveDateTime>,
    /// Latest flight in the filtered set.
    pub data_end: Option<NaiveDateTime>,
    /// Term totals, sorted by descending hours (ties by pilot id).
    pub term_totals: Vec<TermTotal>,
    /// Compliance rows, sorted by pilot id.
    pub compliance: Vec<ComplianceRow>,
}

impl DashboardReport {
    /// Looks up a pilot's term total; absent means zero time in the term.
    pub fn term_total_for(&self, pilot_id: &str) -> Option<&TermTotal> {
        self.term_totals.iter().find(|t| t.pilot_id == pilot_id)
    }

    /// Looks up a pilot's compliance row; absent means the pilot has no
    /// records in the filtered set.
    pub fn compliance_for(&self, pilot_id: &str) -> Option<&ComplianceRow> {
        self.compliance.iter().find(|c| c.pilot_id == pilot_id)
    }

    /// Serializes the report for the rendering/export collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
