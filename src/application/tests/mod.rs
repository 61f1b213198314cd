//! Unit tests for the job application context.

mod domain_tests;
mod repository_tests;
