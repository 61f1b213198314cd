//! Goal tracking and the goal progress engine.
//!
//! Goals count units of progress (usually job applications) towards a
//! target within a period window. This module owns the status rules, the
//! period-to-window mapping and the fan-out that turns one recorded
//! application into increments across every matching goal:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
