//! Feed service
//!
//! Generates a user's feed: fetches every follower's post list through the
//! source ports, then merges the lists into one time-descending sequence.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::app::merge::merge_descending;
use crate::domain::entities::Post;
use crate::domain::ports::{FollowerRepository, PostRepository};
use crate::error::AppError;

/// Default cap on concurrent per-follower post fetches
pub const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// Service for generating merged follower feeds
pub struct FeedService<FR, PR>
where
    FR: FollowerRepository,
    PR: PostRepository,
{
    followers: Arc<FR>,
    posts: Arc<PR>,
    fetch_concurrency: usize,
}

impl<FR, PR> FeedService<FR, PR>
where
    FR: FollowerRepository,
    PR: PostRepository,
{
    pub fn new(followers: Arc<FR>, posts: Arc<PR>) -> Self {
        Self {
            followers,
            posts,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Cap the number of post fetches in flight at once (floor of 1).
    pub fn with_fetch_concurrency(mut self, cap: usize) -> Self {
        self.fetch_concurrency = cap.max(1);
        self
    }

    /// Generate the merged feed for the current user.
    ///
    /// Post lists are fetched with bounded concurrency; the fan-out
    /// preserves follower-list order so the merge's tie-break stays
    /// deterministic. Any fetch failure aborts the whole operation - no
    /// partial feed is ever returned.
    pub async fn generate_feed(&self) -> Result<Vec<Post>, AppError> {
        let followers = self.followers.my_followers().await?;
        tracing::debug!(follower_count = followers.len(), "generating feed");

        let sequences: Vec<Vec<Post>> = stream::iter(followers)
            .map(|follower| {
                let posts = Arc::clone(&self.posts);
                async move {
                    posts
                        .posts_by_follower(&follower.id)
                        .await
                        .map_err(|source| AppError::FollowerFetch {
                            follower: follower.id,
                            source,
                        })
                }
            })
            .buffered(self.fetch_concurrency)
            .try_collect()
            .await?;

        let feed = merge_descending(sequences);
        tracing::debug!(post_count = feed.len(), "feed generated");
        Ok(feed)
    }
}
