//! Job application records.
//!
//! Recording an application is the only event that advances goal progress:
//! [`services::ApplicationService::record`] persists the application and then
//! hands the instant to the goal fan-out.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
