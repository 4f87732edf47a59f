use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::domain::FlightRecord;

/// Immutable categorical filter selections.
///
/// `None` for a category means "no restriction"; `Some(set)` keeps only
/// records whose value is in the set. An empty set therefore matches
/// nothing, mirroring a multiselect with every option deselected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub aircraft_types: Option<HashSet<String>>,
    pub flight_types: Option<HashSet<String>>,
    pub landing_types: Option<HashSet<String>>,
}

impl FilterConfig {
    /// A filter that keeps every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the aircraft-type selection.
    pub fn with_aircraft_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aircraft_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts the flight-type selection.
    pub fn with_flight_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flight_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts the landing-type selection.
    pub fn with_landing_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landing_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if `record` passes every configured selection.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        let in_selection = |selection: &Option<HashSet<String>>, value: &str| match selection {
            Some(set) => set.contains(value),
            None => true,
        };

        in_selection(&self.aircraft_types, &record.aircraft_type)
            && in_selection(&self.flight_types, &record.flight_type)
            && in_selection(&self.landing_types, &record.landing_type)
    }

    /// Filters a record set down to the matching records.
    pub fn apply(&self, records: &[FlightRecord]) -> Vec<FlightRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Sorted distinct values of each categorical column.
///
/// Used by the frontend to populate its filter multiselects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOptions {
    pub aircraft_types: Vec<String>,
    pub flight_types: Vec<String>,
    pub landing_types: Vec<String>,
}

/// Collects the distinct category values present in a record set.
pub fn distinct_categories(records: &[FlightRecord]) -> CategoryOptions {
    fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut distinct: Vec<String> = values
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        distinct.sort();
        distinct
    }

    CategoryOptions {
        aircraft_types: sorted_distinct(records.iter().map(|r| r.aircraft_type.as_str())),
        flight_types: sorted_distinct(records.iter().map(|r| r.flight_type.as_str())),
        landing_types: sorted_distinct(records.iter().map(|r| r.landing_type.as_str())),
    }
}
