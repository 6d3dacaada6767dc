//! Domain model for todo records.
//!
//! The todo domain models validated todo creation, update payloads, and
//! the deterministic presentation ordering while keeping all storage
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod ordering;
mod priority;
mod todo;

pub use error::{ParsePriorityError, TodoDomainError};
pub use ids::TodoId;
pub use ordering::{priority_rank, sort_for_display};
pub use priority::Priority;
pub use todo::{PersistedTodoData, Todo, TodoChanges};
