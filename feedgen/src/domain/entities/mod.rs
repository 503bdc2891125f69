//! Domain entities
//!
//! Pure domain models representing core feed concepts. All values are
//! immutable and transient: constructed per feed request, never persisted.

pub mod follower;
pub mod post;

pub use follower::{Follower, FollowerId};
pub use post::Post;
