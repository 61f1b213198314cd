//! Domain model for goals and their progress.
//!
//! Everything here is pure: status evaluation only needs a clock for the
//! completion timestamp, and window computation only needs a calendar.

mod error;
mod goal;
mod ids;
mod kinds;
mod query;
mod window;

pub use error::GoalDomainError;
pub use goal::{Goal, GoalDefinition, PersistedGoalData};
pub use ids::{GoalId, GoalTarget};
pub use kinds::{GoalPeriod, GoalStatus, GoalType};
pub use query::{GoalQuery, StatusFilter};
pub use window::GoalWindow;
