//! Demo content the server starts with.

use blog_core::DomainError;
use blog_core::domain::NewPost;

const DEMO_POSTS: [(&str, &str); 2] = [
    ("First Post", "Welcome to my blog!"),
    ("Second Post", "Learning EJS is fun!"),
];

/// The two introductory posts, oldest first.
pub fn demo_posts() -> Result<Vec<NewPost>, DomainError> {
    DEMO_POSTS
        .iter()
        .map(|(title, content)| NewPost::new(title, content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_posts_are_valid() {
        let posts = demo_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title(), "First Post");
        assert_eq!(posts[1].content(), "Learning EJS is fun!");
    }
}
