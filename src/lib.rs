//! Careerlog: job-search tracking backend.
//!
//! The crate records job applications, goals, skills and tasks for a user and
//! keeps goal progress in step with applications as they arrive.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Orchestration over ports, generic over store and clock
//!
//! # Modules
//!
//! - [`application`]: Job applications and the fan-out into goal progress
//! - [`goal`]: Goals, their windows and the progress engine
//! - [`dashboard`]: Read-only aggregation for the dashboard
//! - [`skill`]: Skill inventory
//! - [`task`]: To-do items ranked by urgency

pub mod application;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod goal;
pub mod owner;
pub mod skill;
pub mod task;
mod text;

#[cfg(test)]
mod test_support;
