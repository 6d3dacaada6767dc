//! Unit and service tests for todo ownership, ordering, and retrieval.

mod domain_tests;
mod ordering_tests;

pub mod helpers;
