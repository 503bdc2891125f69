//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks over a mocking crate: the ports are small, and explicit
//! implementations make failure injection obvious.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
