//! Post CRUD HTTP handlers.
//!
//! Every handler reloads the collection from storage, mutates it in memory,
//! and (for writes) persists the full document back. There is no shared
//! in-memory state between requests, and no locking: two concurrent writes
//! race on read-modify-write and the last completed save wins.
//!
//! Indexing differs by method: GET addresses posts 1-indexed, PUT and
//! DELETE 0-indexed.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::api::{
    CreatePostResponse, DeletePostResponse, PostBody, SearchQuery, UpdatePostResponse,
};
use crate::handlers::reply;
use crate::model::{Collection, Post};
use crate::server::AppState;

/// GET /api/posts
///
/// The full posts sequence in stored order. A missing document reads as an
/// empty collection.
pub async fn list(State(state): State<AppState>) -> Response {
    match state.store.load().await {
        Ok(Some(collection)) => Json(collection.posts).into_response(),
        Ok(None) => Json(Vec::<Post>::new()).into_response(),
        Err(e) => {
            error!(error = %e, "failed to load posts");
            reply::internal_error("Failed to read posts")
        }
    }
}

/// GET /api/posts/{id}
///
/// 1-indexed: `id = 1` is the first stored post. The bound check accepts
/// `0..=len`, one wider than the posts that exist; `id = 0` passes it and
/// resolves to no post, answered as 200 with an empty body.
pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let collection = match state.store.load().await {
        Ok(Some(c)) => c,
        Ok(None) => return reply::not_found("Post not found"),
        Err(e) => {
            error!(error = %e, "failed to load posts");
            return reply::internal_error("Failed to read post");
        }
    };

    let Ok(id) = id.parse::<i64>() else {
        return reply::not_found("Post not found");
    };

    let len = collection.len() as i64;
    if id < 0 || id >= len + 1 {
        return reply::not_found("Post not found");
    }

    // id passed the bound check; 0 is the one accepted value that still
    // resolves to no post.
    match usize::try_from(id - 1).ok().and_then(|i| collection.posts.get(i)) {
        Some(post) => Json(post).into_response(),
        None => reply::empty_json_ok(),
    }
}

/// POST /api/posts
///
/// Appends to the end of the collection; a missing document starts one.
pub async fn create(State(state): State<AppState>, Json(body): Json<PostBody>) -> Response {
    let Some(post) = body.into_post() else {
        return reply::bad_request("You gotta fill in everything man");
    };

    let mut collection = match state.store.load().await {
        Ok(Some(c)) => c,
        Ok(None) => Collection::default(),
        Err(e) => {
            error!(error = %e, "failed to load posts");
            return reply::internal_error("Failed to create post");
        }
    };

    collection.posts.push(post.clone());

    if let Err(e) = state.store.save(&collection).await {
        error!(error = %e, "failed to save posts");
        return reply::internal_error("Failed to create post");
    }

    (StatusCode::OK, Json(CreatePostResponse { post })).into_response()
}

/// PUT /api/posts/{id}
///
/// 0-indexed. Full replace of the post at `id`; fields not sent are not
/// preserved. The document is loaded and the id validated before the body
/// is, so an out-of-range id answers 404 even with an invalid body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PostBody>,
) -> Response {
    let mut collection = match state.store.load().await {
        Ok(Some(c)) => c,
        Ok(None) => return reply::not_found("Post not found"),
        Err(e) => {
            error!(error = %e, "failed to load posts");
            return reply::internal_error("Failed to update post");
        }
    };

    let Some(index) = checked_index(&id, collection.len()) else {
        return reply::not_found("Post not found");
    };

    let Some(post) = body.into_post() else {
        return reply::bad_request("All fields are required");
    };

    collection.posts[index] = post.clone();

    if let Err(e) = state.store.save(&collection).await {
        error!(error = %e, "failed to save posts");
        return reply::internal_error("Failed to update post");
    }

    (
        StatusCode::OK,
        Json(UpdatePostResponse {
            success: "post replaced.".to_string(),
            post,
        }),
    )
        .into_response()
}

/// DELETE /api/posts/{id}
///
/// 0-indexed, same bound check as update. The removed post comes back as a
/// one-element sequence.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut collection = match state.store.load().await {
        Ok(Some(c)) => c,
        Ok(None) => return reply::not_found("Post not found"),
        Err(e) => {
            error!(error = %e, "failed to load posts");
            return reply::internal_error("Failed to delete post");
        }
    };

    let Some(index) = checked_index(&id, collection.len()) else {
        return reply::not_found("Post not found");
    };

    let removed = collection.posts.remove(index);

    if let Err(e) = state.store.save(&collection).await {
        error!(error = %e, "failed to save posts");
        return reply::internal_error("Failed to delete post");
    }

    (
        StatusCode::OK,
        Json(DeletePostResponse {
            message: "eradicated".to_string(),
            post_to_destroy: vec![removed],
        }),
    )
        .into_response()
}

/// GET /api/posts/search?q=...
///
/// Posts whose title contains the query substring, case-insensitively, in
/// stored order. No query matches everything; a missing document is an
/// empty result, not an error.
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Response {
    let collection = match state.store.load().await {
        Ok(Some(c)) => c,
        Ok(None) => return Json(Vec::<Post>::new()).into_response(),
        Err(e) => {
            error!(error = %e, "failed to load posts");
            return reply::internal_error("Failed to search posts");
        }
    };

    let needle = query.q.unwrap_or_default().to_lowercase();
    let matches: Vec<Post> = collection
        .posts
        .into_iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .collect();

    Json(matches).into_response()
}

/// Parse a 0-indexed path id and check it against the collection length.
fn checked_index(raw: &str, len: usize) -> Option<usize> {
    let id = raw.parse::<i64>().ok()?;
    if id < 0 || id >= len as i64 {
        return None;
    }
    Some(id as usize)
}
