//! Publish notifier implementations.

mod console;
mod memory;

pub use console::ConsoleNotifier;
pub use memory::RecordingNotifier;
