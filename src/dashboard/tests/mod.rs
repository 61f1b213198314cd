//! Unit tests for dashboard aggregation.
