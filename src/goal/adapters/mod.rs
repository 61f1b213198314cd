//! Adapter implementations for goal ports.

pub mod memory;
