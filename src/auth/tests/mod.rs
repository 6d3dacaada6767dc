//! Unit and service tests for credential and session handling.


pub mod helpers;
