//! Core domain models for flight-currency computation.
//!
//! This module defines the fundamental data structures used throughout the
//! backend, representing flight-log records, qualifying flight time, and the
//! date ranges and rolling windows over which currency is assessed.

pub mod domain;
