//! Data Transfer Objects - request bodies accepted by the API.

use serde::{Deserialize, Serialize};

use blog_core::DomainError;
use blog_core::domain::{NewPost, PostPatch};

/// Request to create a post.
///
/// Fields are optional on the wire so that a missing field is reported as
/// a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn into_draft(self) -> Result<NewPost, DomainError> {
        NewPost::new(
            self.title.unwrap_or_default(),
            self.content.unwrap_or_default(),
        )
    }
}

/// Request to update a post. Absent or blank fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_patch(self) -> PostPatch {
        PostPatch::new(self.title, self.content)
    }
}
