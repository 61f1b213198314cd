//! Adapter implementations for skill ports.

pub mod memory;
