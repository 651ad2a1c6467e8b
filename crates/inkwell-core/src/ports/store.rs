use crate::domain::Post;

/// Write side of the post store. Appending is the only mutation the
/// editor may perform.
pub trait PostSink {
    /// Add a post after all existing posts.
    fn append(&mut self, post: Post);
}

impl PostSink for Vec<Post> {
    fn append(&mut self, post: Post) {
        self.push(post);
    }
}
