//! The persisted data model: posts and the document that wraps them.

use serde::{Deserialize, Serialize};

/// A single blog post.
///
/// Posts carry no identifier; a post's identity is its position in the
/// collection array. `created_at` is an opaque timestamp string supplied by
/// the client and is not validated for format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// The full on-disk document: an ordered sequence of posts.
///
/// The file on disk is the sole source of truth. Handlers reconstruct this
/// in memory on every request and discard it after responding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub posts: Vec<Post>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
