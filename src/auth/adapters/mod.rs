//! Adapter implementations for auth ports.

pub mod hashing;
pub mod memory;
pub mod postgres;
