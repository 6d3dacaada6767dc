//! Domain model for credential and session handling.
//!
//! The auth domain models user records, opaque session tokens, and the
//! session capability bound to a user reference while keeping hashing and
//! storage concerns outside of the domain boundary.

mod error;
mod ids;
mod session;
mod user;

pub use error::AuthDomainError;
pub use ids::{SessionToken, UserId};
pub use session::Session;
pub use user::User;
