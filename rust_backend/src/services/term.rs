//! Term Aggregator: qualifying flight time per pilot over a reporting range.

use std::collections::HashMap;

use crate::core::domain::{FlightRecord, FlightTime, TermRange};

/// Total qualifying time of one pilot within the reporting term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotTermTotal {
    pub pilot_id: String,
    pub total: FlightTime,
}

/// Sums qualifying flight time per pilot over `range`, both ends inclusive.
///
/// Pilots with no records in range are omitted rather than zero-filled;
/// callers merging with other pilot lists treat "absent" as zero. Output is
/// sorted by descending total, ties broken by ascending pilot id so the
/// ordering is deterministic. An empty input yields an empty output.
pub fn compute_term_totals(records: &[FlightRecord], range: &TermRange) -> Vec<PilotTermTotal> {
    let mut totals: HashMap<&str, FlightTime> = HashMap::new();

    for record in records {
        if range.contains(record.flight_date.date()) {
            *totals.entry(record.pilot_id.as_str()).or_default() += record.duration;
        }
    }

    let mut result: Vec<PilotTermTotal> = totals
        .into_iter()
        .map(|(pilot_id, total)| PilotTermTotal {
            pilot_id: pilot_id.to_string(),
            total,
        })
        .collect();

    result.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.pilot_id.cmp(&b.pilot_id))
    });

    result
}
