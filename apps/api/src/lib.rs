//! Cash-in-transit dispatch API library
//!
//! Backs the operations dashboard: operator sign-in, the active staff and
//! vehicle roster, and the daily team shuffle that turns the roster into
//! fixed-composition crews.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
