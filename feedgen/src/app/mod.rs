//! Application services
//!
//! Service layer orchestrating the domain ports: fetches follower post
//! lists and merges them into a single feed.

pub mod feed_service;
pub mod merge;

pub use feed_service::{FeedService, DEFAULT_FETCH_CONCURRENCY};
pub use merge::merge_descending;
