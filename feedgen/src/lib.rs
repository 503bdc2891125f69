//! Feed generation library
//!
//! Builds a user's social feed by merging every follower's post list
//! (each already sorted newest-first) into one globally time-descending
//! sequence. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns: the domain defines the follower/post sources
//! as port traits, and the application layer performs the fetch fan-out
//! and the k-way merge.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{merge_descending, FeedService};
pub use config::Config;
pub use domain::entities::{Follower, FollowerId, Post};
pub use error::{AppError, DomainError};
