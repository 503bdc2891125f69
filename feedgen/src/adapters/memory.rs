//! In-memory adapters for the source ports
//!
//! Seeded up front and read-only afterwards. Used by the demo binary and
//! by tests; real deployments would back the ports with whatever transport
//! they use.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{Follower, FollowerId, Post};
use crate::domain::ports::{FollowerRepository, PostRepository};
use crate::error::DomainError;

/// Fixed follower list
#[derive(Debug, Clone, Default)]
pub struct InMemoryFollowerRepository {
    followers: Vec<Follower>,
}

impl InMemoryFollowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a follower
    pub fn with_follower(mut self, follower: Follower) -> Self {
        self.followers.push(follower);
        self
    }
}

#[async_trait]
impl FollowerRepository for InMemoryFollowerRepository {
    async fn my_followers(&self) -> Result<Vec<Follower>, DomainError> {
        Ok(self.followers.clone())
    }
}

/// Post lists keyed by follower
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    posts: HashMap<FollowerId, Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a follower's post list. Must already be sorted descending by
    /// timestamp, as the port contract requires.
    pub fn with_posts(mut self, follower: FollowerId, posts: Vec<Post>) -> Self {
        self.posts.insert(follower, posts);
        self
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn posts_by_follower(&self, id: &FollowerId) -> Result<Vec<Post>, DomainError> {
        self.posts
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("no posts recorded for follower {id}")))
    }
}
