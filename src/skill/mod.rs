//! Skill inventory.
//!
//! Skills record what a user knows and what they are learning. They have no
//! effect on goals or the dashboard.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
