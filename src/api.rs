//! Wire types for the post API.
//!
//! These types define the request and response bodies handlers exchange
//! with clients. The persisted `Post` itself doubles as its own wire
//! representation (see `model`).

use serde::{Deserialize, Serialize};

use crate::model::Post;

// ============================================================================
// Request Types
// ============================================================================

/// Body for create and update.
///
/// All four fields are required, but they are modeled as `Option` so the
/// presence check happens in the handler and produces a 400 with an
/// `error` body instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl PostBody {
    /// Validate presence of every field, rejecting empty strings too.
    ///
    /// Empty string and absence are deliberately not distinguished: the
    /// check mirrors a truthiness test, so `""` fails alongside a missing
    /// key.
    pub fn into_post(self) -> Option<Post> {
        fn required(field: Option<String>) -> Option<String> {
            field.filter(|v| !v.is_empty())
        }

        Some(Post {
            title: required(self.title)?,
            content: required(self.content)?,
            author: required(self.author)?,
            created_at: required(self.created_at)?,
        })
    }
}

/// Query parameters for title search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub post: Post,
}

/// Response for a successful update.
#[derive(Debug, Serialize)]
pub struct UpdatePostResponse {
    pub success: String,
    pub post: Post,
}

/// Response for a successful delete.
///
/// The removed post is returned as a one-element sequence, matching the
/// splice-style removal it came from.
#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub message: String,
    #[serde(rename = "postToDestroy")]
    pub post_to_destroy: Vec<Post>,
}

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Error payload shared by every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
