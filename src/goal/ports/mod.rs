//! Port contracts for goal persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by goal services.

pub mod repository;

#[cfg(test)]
pub use repository::MockGoalRepository;
pub use repository::{GoalRepository, GoalRepositoryError, GoalRepositoryResult};
