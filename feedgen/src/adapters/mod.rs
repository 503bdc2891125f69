//! Adapters
//!
//! Concrete implementations of the domain ports. Only in-memory adapters
//! live here; an embedding system supplies its own transport-backed ones.

pub mod memory;

pub use memory::{InMemoryFollowerRepository, InMemoryPostRepository};
