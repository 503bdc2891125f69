//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{Follower, FollowerId, Post};

/// Create a follower with a fresh random id
pub fn test_follower() -> Follower {
    Follower::new(FollowerId::new())
}

/// Create a post with the given content and timestamp
pub fn test_post(content: &str, timestamp: DateTime<Utc>) -> Post {
    Post::new(content, timestamp)
}

/// Create a post list at `base + hours[i]` offsets, contents numbered by
/// position. Pass offsets in descending order to satisfy the sorted
/// precondition; ascending or mixed offsets give a deliberately malformed
/// list.
pub fn posts_at_hours(prefix: &str, base: DateTime<Utc>, hours: &[i64]) -> Vec<Post> {
    hours
        .iter()
        .enumerate()
        .map(|(i, h)| Post::new(format!("{prefix}-{i}"), base + Duration::hours(*h)))
        .collect()
}
