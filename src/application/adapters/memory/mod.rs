//! In-memory adapters for job application ports.

mod application;

pub use application::InMemoryApplicationRepository;
