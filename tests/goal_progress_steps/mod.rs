//! Step definitions for goal progress scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
