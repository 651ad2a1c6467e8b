//! Notifier that surfaces confirmations to the person at the terminal.

use inkwell_core::ports::{Notification, PublishNotifier};

/// Prints confirmations to stderr, keeping stdout for command output.
pub struct ConsoleNotifier;

impl PublishNotifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("✔ {} ({})", notification.message, notification.title);
    }
}
