//! Service layer for business logic and orchestration.
//!
//! Services consume normalized [`FlightRecord`](crate::core::domain::FlightRecord)
//! sets together with the frontend's filter and parameter selections and
//! produce the typed results the rendering/export layer displays.
//!
//! - [`term`]: Term Aggregator — qualifying time per pilot over a reporting
//!   range.
//! - [`currency`]: Rolling Compliance Engine — trailing-window totals and
//!   projected expiration dates.
//! - [`report`]: Orchestration of filter → term → currency into one
//!   dashboard report.

pub mod currency;
pub mod report;
pub mod term;

pub use currency::{compute_compliance, PilotCompliance};
pub use report::build_dashboard_report;
pub use term::{compute_term_totals, PilotTermTotal};
