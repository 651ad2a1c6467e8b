//! In-memory post store.
//!
//! Posts live for the lifetime of the process only.

use inkwell_core::domain::Post;
use inkwell_core::ports::PostSink;

/// Append `post` after every existing post.
pub fn append(mut posts: Vec<Post>, post: Post) -> Vec<Post> {
    posts.push(post);
    posts
}

/// Insertion-ordered, append-only post store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Vec<Post>,
}

impl InMemoryPostStore {
    /// Store pre-populated with seed posts, kept in the given order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        tracing::debug!(count = posts.len(), "Post store seeded");
        Self { posts }
    }

    /// Read-only view for list rendering.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostSink for InMemoryPostStore {
    fn append(&mut self, post: Post) {
        let current = std::mem::take(&mut self.posts);
        self.posts = append(current, post);
        tracing::debug!(count = self.posts.len(), "Post appended to store");
    }
}
