//! Record filtering for the dashboard frontend.
//!
//! The frontend's sidebar selections (aircraft type, flight type, landing
//! type) are captured as an explicit, immutable [`FilterConfig`] passed into
//! the service calls, keeping UI state fully decoupled from the computation.
//!
//! # Modules
//!
//! - [`filtering`]: Apply categorical filters and list the distinct
//!   category values a frontend can offer.

pub mod filtering;

pub use filtering::{distinct_categories, CategoryOptions, FilterConfig};
