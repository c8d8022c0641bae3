//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Posts live in process memory; nothing is persisted.

pub mod store;

// Re-exports - In-Memory
pub use store::{InMemoryPostStore, demo_posts};
