//! Post store implementations.

mod memory;
mod seed;

pub use memory::InMemoryPostStore;
pub use seed::demo_posts;
