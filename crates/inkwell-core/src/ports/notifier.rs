use crate::domain::Post;

/// Confirmation emitted after a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub title: String,
}

impl Notification {
    pub const PUBLISHED: &'static str = "Post published successfully!";

    pub fn published(post: &Post) -> Self {
        Self {
            message: Self::PUBLISHED.to_string(),
            title: post.title.clone(),
        }
    }
}

/// Fire-and-forget side channel for user-facing confirmations.
pub trait PublishNotifier {
    fn notify(&self, notification: &Notification);
}
