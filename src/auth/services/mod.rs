//! Application services for session issuance and revocation.

mod session;

pub use session::{SessionService, SessionServiceError, SessionServiceResult};
