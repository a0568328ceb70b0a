//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, money, errors)
//! - `pricing` - Rate sheet, event parameters and the cost calculator
//! - `scenario` - Bounded scenario store and comparison analysis
//! - `export` - Portable export documents

pub mod export;
pub mod foundation;
pub mod pricing;
pub mod scenario;
