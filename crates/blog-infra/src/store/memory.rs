//! In-memory post store - the only store the server ships with.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostId, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

struct StoreState {
    /// Insertion order.
    posts: Vec<Post>,
    /// Next id to hand out. Independent of `posts.len()` so deletes never
    /// cause an id to be reused.
    next_id: i64,
    /// Latest `created_at` ever issued, kept so timestamps never go
    /// backwards when the wall clock does.
    last_created_at: Option<DateTime<Utc>>,
}

impl StoreState {
    fn insert(&mut self, draft: NewPost) -> Result<Post, RepoError> {
        let id = PostId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Internal("post id space exhausted".to_string()))?;

        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(created_at);

        let post = Post::from_draft(id, draft, created_at);
        self.posts.push(post.clone());
        Ok(post)
    }

    fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|p| p.id == id)
    }
}

/// In-memory post store using a `Vec` behind an async RwLock.
///
/// Mutations take the write lock, so concurrent requests cannot race on the
/// id counter. Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    state: RwLock<StoreState>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                posts: Vec::new(),
                next_id: 1,
                last_created_at: None,
            }),
        }
    }

    /// Build a store pre-populated with `drafts`, created in order.
    pub fn seeded(drafts: impl IntoIterator<Item = NewPost>) -> Result<Self, RepoError> {
        let mut store = Self::new();
        let state = store.state.get_mut();
        for draft in drafts {
            state.insert(draft)?;
        }
        Ok(store)
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        let post = state.insert(draft)?;
        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        let index = state.position(id).ok_or(RepoError::NotFound)?;

        let post = &mut state.posts[index];
        post.apply(patch);
        tracing::debug!(post_id = %id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        let index = state.position(id).ok_or(RepoError::NotFound)?;
        state.posts.remove(index);
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        let mut posts = state.posts.clone();
        // Newest first; equal timestamps fall back to the later id.
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn len(&self) -> usize {
        self.state.read().await.posts.len()
    }
}
