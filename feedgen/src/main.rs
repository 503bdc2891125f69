//! Feed generation demo
//!
//! Wires the in-memory adapters with a few seeded followers and posts,
//! generates the merged feed, and prints it as JSON.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedgen::adapters::{InMemoryFollowerRepository, InMemoryPostRepository};
use feedgen::app::FeedService;
use feedgen::config::Config;
use feedgen::domain::entities::{Follower, FollowerId, Post};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feedgen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        fetch_concurrency = config.fetch_concurrency,
        "Generating demo feed"
    );

    let now = Utc::now();
    let alice = Follower::new(FollowerId::new());
    let bob = Follower::new(FollowerId::new());
    let carol = Follower::new(FollowerId::new());

    let follower_repo = Arc::new(
        InMemoryFollowerRepository::new()
            .with_follower(alice)
            .with_follower(bob)
            .with_follower(carol),
    );
    let post_repo = Arc::new(
        InMemoryPostRepository::new()
            .with_posts(
                alice.id,
                vec![
                    Post::new("shipping the new release", now - Duration::minutes(5)),
                    Post::new("coffee first", now - Duration::hours(3)),
                ],
            )
            .with_posts(
                bob.id,
                vec![
                    Post::new("weekend hike photos", now - Duration::hours(1)),
                    Post::new("trailhead at dawn", now - Duration::hours(7)),
                ],
            )
            .with_posts(carol.id, Vec::new()),
    );

    let service = FeedService::new(follower_repo, post_repo)
        .with_fetch_concurrency(config.fetch_concurrency);
    let feed = service.generate_feed().await?;

    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
