//! Read-side dashboard aggregation.
//!
//! Turns a user's goals, applications and tasks into a point-in-time
//! snapshot: today's target and how much of it is done, the current streak
//! of completed daily goals, overall progress across open goals, the next
//! task to pick up, and per-day application counts for charts. Nothing here
//! writes.
//!
//! - Pure computations and the snapshot type in [`domain`]
//! - The store-backed aggregator in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
