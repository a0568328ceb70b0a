//! Event Budget - Cost estimation and scenario comparison for planned events.
//!
//! This crate turns event parameters (city, audience, venue, catering,
//! duration, add-on services) into an itemized budget breakdown, keeps
//! named scenarios side by side, and derives comparison insights from them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
