//! Domain model for job applications.

mod application;
mod error;
mod ids;
mod series;
mod status;

pub use application::{ApplicationDetails, JobApplication, PersistedApplicationData};
pub use error::ApplicationDomainError;
pub use ids::ApplicationId;
pub use series::DailyApplicationCount;
pub use status::ApplicationStatus;
