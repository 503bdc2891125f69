//! Repository port traits
//!
//! These traits define the interface for the two data sources feed
//! generation depends on. Implementations are provided by adapters
//! (in-memory here; an embedding system may back them with HTTP, RPC,
//! or a database).

use async_trait::async_trait;

use crate::domain::entities::{Follower, FollowerId, Post};
use crate::error::DomainError;

/// Source of the current user's follower list
#[async_trait]
pub trait FollowerRepository: Send + Sync {
    /// List the current user's followers.
    ///
    /// Fails with [`DomainError::SourceUnavailable`] when the backing
    /// store cannot be reached.
    async fn my_followers(&self) -> Result<Vec<Follower>, DomainError>;
}

/// Source of per-follower post lists
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every post authored by the given follower, sorted descending
    /// by timestamp (newest first).
    ///
    /// The descending order is a contract of this port: callers rely on it
    /// and do not re-sort. An empty list is valid. Fails with
    /// [`DomainError::SourceUnavailable`] when the backing store cannot be
    /// reached.
    async fn posts_by_follower(&self, id: &FollowerId) -> Result<Vec<Post>, DomainError>;
}
