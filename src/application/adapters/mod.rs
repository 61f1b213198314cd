//! Adapter implementations for job application ports.

pub mod memory;
