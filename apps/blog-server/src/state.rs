//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{InMemoryPostStore, demo_posts};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state, optionally seeded with the demo posts.
    pub fn new(seed_posts: bool) -> Self {
        let store = if seed_posts {
            match demo_posts()
                .map_err(|e| e.to_string())
                .and_then(|drafts| InMemoryPostStore::seeded(drafts).map_err(|e| e.to_string()))
            {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!("Failed to seed demo posts: {}. Starting empty.", e);
                    InMemoryPostStore::new()
                }
            }
        } else {
            tracing::info!("SEED_POSTS disabled - starting with an empty store");
            InMemoryPostStore::new()
        };

        tracing::info!("Application state initialized");

        Self::with_repository(Arc::new(store))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
