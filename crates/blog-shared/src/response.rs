//! Response bodies. Every JSON response carries a human-readable `message`.

use serde::{Deserialize, Serialize};

use blog_core::domain::Post;

/// `{message, post}` - returned after a post is created or updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub message: String,
    pub post: Post,
}

impl PostResponse {
    pub fn new(message: impl Into<String>, post: Post) -> Self {
        Self {
            message: message.into(),
            post,
        }
    }

    pub fn created(post: Post) -> Self {
        Self::new("Post added successfully!", post)
    }

    pub fn updated(post: Post) -> Self {
        Self::new("Post updated successfully!", post)
    }
}

/// `{message}` - used for deletions and for every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn deleted() -> Self {
        Self::new("Post deleted successfully!")
    }

    pub fn post_not_found() -> Self {
        Self::new("Post not found.")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error.")
    }
}
