//! Daylist: personal task-tracking core.
//!
//! This crate provides the task-ownership and retrieval core of a personal
//! task tracker: session-gated access to per-user todo records, scoped
//! storage writes that enforce ownership isolation, and a deterministic
//! ordering policy for presentation.
//!
//! # Architecture
//!
//! Daylist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, hashing)
//!
//! # Modules
//!
//! - [`auth`]: Credential storage and session issuance
//! - [`todo`]: Todo records, ownership-scoped persistence, and ordering

pub mod auth;
pub mod todo;
