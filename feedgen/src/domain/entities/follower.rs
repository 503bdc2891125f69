//! Follower domain entity
//!
//! An identity whose authored posts should appear in a feed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a follower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FollowerId(pub Uuid);

impl FollowerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FollowerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FollowerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FollowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A follower of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follower {
    pub id: FollowerId,
}

impl Follower {
    pub fn new(id: FollowerId) -> Self {
        Self { id }
    }
}
