use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Message returned when a post is created without a title or content.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and content are required.";

/// Post identifier - assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl PostId {
    /// Coerce an identifier carried as text (e.g. a path segment).
    ///
    /// Numeric text with an integral value matches, so `"1"`, `"01"` and
    /// `"1.0"` all name post 1. Anything else, including fractions and
    /// values outside `i64`, returns `None` so callers can treat it as
    /// "no such post".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(id) = raw.parse::<i64>() {
            return Some(Self(id));
        }

        // Integral decimals. `i64::MAX as f64` rounds up to 2^63, so the
        // upper bound is exclusive.
        let value = raw.parse::<f64>().ok()?;
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        (value.is_finite() && value.fract() == 0.0 && in_range).then(|| Self(value as i64))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Materialize a validated draft with the identity and timestamp
    /// chosen by the store.
    pub fn from_draft(id: PostId, draft: NewPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created_at,
        }
    }

    /// Apply a partial update. Only fields present in the patch change.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// A validated request to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
}

impl NewPost {
    /// Both fields are trimmed and must be non-empty afterwards.
    pub fn new(title: impl AsRef<str>, content: impl AsRef<str>) -> Result<Self, DomainError> {
        let title = title.as_ref().trim();
        let content = content.as_ref().trim();

        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A partial update. Blank values are dropped so they never clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    title: Option<String>,
    content: Option<String>,
}

impl PostPatch {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: non_blank(title),
            content: non_blank(content),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_parse() {
        assert_eq!(PostId::parse("42"), Some(PostId(42)));
        assert_eq!(PostId::parse(" 7 "), Some(PostId(7)));
        assert_eq!(PostId::parse("abc"), None);
        assert_eq!(PostId::parse("1.5"), None);
        assert_eq!(PostId::parse("1.0"), Some(PostId(1)));
        assert_eq!(PostId::parse("01"), Some(PostId(1)));
        assert_eq!(PostId::parse("+1"), Some(PostId(1)));
        assert_eq!(PostId::parse("inf"), None);
        assert_eq!(PostId::parse("NaN"), None);
        assert_eq!(PostId::parse(""), None);
        assert_eq!(PostId::parse("99999999999999999999999"), None);
    }

    #[test]
    fn test_new_post_trims_fields() {
        let draft = NewPost::new("  Hello ", "\tWorld\n").unwrap();
        assert_eq!(draft.title(), "Hello");
        assert_eq!(draft.content(), "World");
    }

    #[test]
    fn test_new_post_rejects_blank_fields() {
        for (title, content) in [("", "body"), ("title", ""), ("   ", "body"), ("title", "\n\t")] {
            let err = NewPost::new(title, content).unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref msg) if msg == MISSING_FIELDS_MESSAGE));
        }
    }

    #[test]
    fn test_patch_drops_blank_values() {
        let patch = PostPatch::new(Some("".into()), Some("   ".into()));
        assert!(patch.is_empty());

        let patch = PostPatch::new(Some(" Updated ".into()), None);
        assert_eq!(patch.title(), Some("Updated"));
        assert_eq!(patch.content(), None);
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let draft = NewPost::new("First Post", "Welcome to my blog!").unwrap();
        let mut post = Post::from_draft(PostId(1), draft, Utc::now());
        let created_at = post.created_at;

        post.apply(PostPatch::new(Some("Updated".into()), Some(String::new())));

        assert_eq!(post.id, PostId(1));
        assert_eq!(post.title, "Updated");
        assert_eq!(post.content, "Welcome to my blog!");
        assert_eq!(post.created_at, created_at);
    }

    #[test]
    fn test_post_wire_form_uses_camel_case() {
        let draft = NewPost::new("Title", "Body").unwrap();
        let post = Post::from_draft(PostId(3), draft, Utc::now());

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Title");
        assert!(json["createdAt"].is_string());
        assert!(json.get("created_at").is_none());
    }
}
