//! Credential storage and session issuance for Daylist.
//!
//! This module owns the identity side of the tracker: user records with
//! hashed passwords, opaque session tokens minted at login and destroyed
//! at logout, and the resolver gate every todo operation passes through
//! before touching storage. The module follows hexagonal architecture:
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
