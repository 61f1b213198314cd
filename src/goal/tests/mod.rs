//! Unit tests for the goal module.
