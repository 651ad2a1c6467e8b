//! Notifier that keeps every confirmation in memory.

use std::cell::RefCell;

use inkwell_core::ports::{Notification, PublishNotifier};

/// Records notifications so callers can inspect them later.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }
}

impl PublishNotifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.sent.borrow_mut().push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_notifications_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(&Notification {
            message: Notification::PUBLISHED.to_string(),
            title: "Hello".to_string(),
        });

        notifier.notify(&Notification {
            message: Notification::PUBLISHED.to_string(),
            title: "World".to_string(),
        });

        let titles: Vec<_> = notifier.sent().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["Hello", "World"]);
    }
}
