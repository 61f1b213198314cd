//! In-memory adapters for goal persistence.

mod goal;

pub use goal::InMemoryGoalRepository;
