//! Todo ownership and retrieval for Daylist.
//!
//! This module owns the task records themselves: validated creation,
//! ownership-scoped updates and deletes where a foreign id behaves exactly
//! like a missing one, and the canonical ordering applied to list results.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
