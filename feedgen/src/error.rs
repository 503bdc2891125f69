//! Unified error types for feed generation
//!
//! This module defines error types for each layer:
//! - `DomainError`: errors originating in the follower/post sources
//! - `AppError`: application layer errors returned by services
//!
//! The merge algorithm itself is total over well-formed input and never
//! produces an error; every failure here comes from fetching data.

use thiserror::Error;

use crate::domain::entities::FollowerId;

/// Domain layer errors - produced by the source ports
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Application layer errors - returned by services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A post fetch failed for a specific follower. Feed generation is
    /// all-or-nothing: no partial feed is returned on this error.
    #[error("Failed to fetch posts for follower {follower}: {source}")]
    FollowerFetch {
        follower: FollowerId,
        source: DomainError,
    },
}

impl AppError {
    /// The follower whose fetch failed, if the error is attributable to one.
    pub fn failed_follower(&self) -> Option<&FollowerId> {
        match self {
            AppError::FollowerFetch { follower, .. } => Some(follower),
            AppError::Domain(_) => None,
        }
    }
}
