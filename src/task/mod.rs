//! Personal to-do tasks.
//!
//! Tasks carry a priority and an optional due date. Completing a task stamps
//! when it happened; reopening it clears the stamp. The dashboard picks the
//! most urgent open task as the next action. The module follows the same
//! layering as every other context:
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
