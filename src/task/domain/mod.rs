//! Domain model for tasks.
//!
//! Everything here is pure. Ordering by urgency lives in the domain so the
//! listing and the dashboard agree on what "most urgent" means.

mod error;
mod ids;
mod kinds;
mod ordering;
mod query;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use kinds::{TaskPriority, TaskType};
pub use ordering::by_urgency;
pub use query::TaskQuery;
pub use task::{PersistedTaskData, Task, TaskDetails};
