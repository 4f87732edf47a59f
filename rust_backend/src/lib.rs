//! Flight-currency compliance backend.
//!
//! A pure, stateless computation core for pilot flight-currency dashboards.
//! Given a normalized set of flight-log records, it produces per pilot the
//! total qualifying time within a reporting term, the total within a
//! trailing rolling window ending at a reference date, and the projected
//! date on which rolling-window compliance lapses as older flights age out.
//!
//! File ingestion, data cleaning, UI state, and rendering/export are
//! external collaborators: they hand this crate normalized
//! [`FlightRecord`](core::domain::FlightRecord)s plus an explicit filter and
//! parameter selection, and render the
//! [`DashboardReport`](api::types::DashboardReport) it returns.

pub mod api;
pub mod core;
pub mod error;
pub mod services;
pub mod transformations;

pub use error::{CurrencyError, CurrencyResult};
