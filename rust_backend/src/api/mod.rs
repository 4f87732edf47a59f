//! # API Module
//!
//! Frontend-facing surface of the backend. The rendering/export layer (a
//! dashboard frontend) consumes the DTOs defined here; internal models
//! ([`FlightTime`](crate::core::domain::FlightTime) and friends) never cross
//! this boundary, so the internals can evolve freely.
//!
//! - [`types`]: serializable DTOs built from primitives and chrono types.
//! - [`conversions`]: conversion layer from internal service results to
//!   DTOs, including the two-decimal rounding of hour values.

pub mod conversions;
pub mod types;

pub use types::{ComplianceRow, DashboardReport, TermTotal};
