//! Mock implementations of port traits
//!
//! Failure-injecting sources for exercising error propagation. The happy
//! path uses the real in-memory adapters.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{Follower, FollowerId, Post};
use crate::domain::ports::{FollowerRepository, PostRepository};
use crate::error::DomainError;

/// Follower directory that is always down
pub struct UnavailableFollowerRepository;

#[async_trait]
impl FollowerRepository for UnavailableFollowerRepository {
    async fn my_followers(&self) -> Result<Vec<Follower>, DomainError> {
        Err(DomainError::SourceUnavailable(
            "follower directory offline".to_string(),
        ))
    }
}

/// Post store that is always down
pub struct UnavailablePostRepository;

#[async_trait]
impl PostRepository for UnavailablePostRepository {
    async fn posts_by_follower(&self, _id: &FollowerId) -> Result<Vec<Post>, DomainError> {
        Err(DomainError::SourceUnavailable("post store offline".to_string()))
    }
}

/// Post store that fails for one specific follower and serves the rest
pub struct FlakyPostRepository {
    failing: FollowerId,
    posts: HashMap<FollowerId, Vec<Post>>,
}

impl FlakyPostRepository {
    pub fn new(failing: FollowerId) -> Self {
        Self {
            failing,
            posts: HashMap::new(),
        }
    }

    /// Seed a healthy follower's post list (sorted descending)
    pub fn with_posts(mut self, follower: FollowerId, posts: Vec<Post>) -> Self {
        self.posts.insert(follower, posts);
        self
    }
}

#[async_trait]
impl PostRepository for FlakyPostRepository {
    async fn posts_by_follower(&self, id: &FollowerId) -> Result<Vec<Post>, DomainError> {
        if *id == self.failing {
            return Err(DomainError::SourceUnavailable(format!(
                "post store timed out for follower {id}"
            )));
        }
        Ok(self.posts.get(id).cloned().unwrap_or_default())
    }
}
