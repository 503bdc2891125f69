//! Post domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped content item authored by a follower
///
/// Immutable value. Distinct posts may carry identical timestamps; the
/// merge's tie-break policy decides their relative feed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            timestamp,
        }
    }
}
