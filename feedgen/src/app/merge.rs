//! K-way merge of pre-sorted post sequences
//!
//! The core of feed generation: combines k per-follower post lists, each
//! already sorted descending by timestamp, into one globally descending
//! sequence via a priority queue. O(N log K) for N total posts across K
//! non-empty sources; each post is pushed and popped exactly once.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use crate::domain::entities::Post;

/// Heap entry holding one source's current head post.
///
/// Ordered so the max-heap pops the greatest timestamp first. On equal
/// timestamps the lower source index wins, so ties between followers
/// resolve in input-list order.
struct HeapEntry {
    post: Post,
    source: usize,
}

impl HeapEntry {
    fn key(&self) -> (DateTime<Utc>, std::cmp::Reverse<usize>) {
        (self.post.timestamp, std::cmp::Reverse(self.source))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Merge per-follower post sequences into one descending feed.
///
/// Preconditions: each input sequence is sorted descending by timestamp.
/// This is not validated or corrected; a caller that violates it gets
/// undefined ordering among that source's posts, though every post still
/// appears exactly once and the merge still terminates.
///
/// Tie-break policy: posts with equal timestamps from different sources
/// appear in source order (the first-listed follower wins). This is
/// deterministic for a fixed input ordering and is pinned by tests.
///
/// Empty input and empty sequences are fine: zero sources yields an empty
/// feed, and a source with no posts is simply never enqueued.
pub fn merge_descending(sequences: Vec<Vec<Post>>) -> Vec<Post> {
    let total: usize = sequences.iter().map(Vec::len).sum();
    let mut feed = Vec::with_capacity(total);

    let mut heap = BinaryHeap::with_capacity(sequences.len());
    let mut sources: Vec<std::vec::IntoIter<Post>> = Vec::with_capacity(sequences.len());

    for (source, posts) in sequences.into_iter().enumerate() {
        let mut iter = posts.into_iter();
        if let Some(head) = iter.next() {
            heap.push(HeapEntry { post: head, source });
        }
        sources.push(iter);
    }

    while let Some(entry) = heap.pop() {
        if let Some(next) = sources[entry.source].next() {
            heap.push(HeapEntry {
                post: next,
                source: entry.source,
            });
        }
        feed.push(entry.post);
    }

    feed
}
