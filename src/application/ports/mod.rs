//! Port contracts for job application persistence.

pub mod repository;

#[cfg(test)]
pub use repository::MockApplicationRepository;
pub use repository::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult,
};
