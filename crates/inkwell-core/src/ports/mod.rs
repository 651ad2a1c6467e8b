//! Ports - traits the editor uses to reach the rest of the application.

mod clock;
mod notifier;
mod store;

pub use clock::Clock;
pub use notifier::{Notification, PublishNotifier};
pub use store::PostSink;
