//! Dashboard aggregation service.

mod dashboard;

pub use dashboard::{DashboardError, DashboardResult, DashboardService};
