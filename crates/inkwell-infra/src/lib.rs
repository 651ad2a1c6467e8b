//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `inkwell-core`:
//! the in-memory post store, clocks, publish notifiers and seed data.

pub mod clock;
pub mod notify;
pub mod seed;
pub mod store;

pub use clock::{FixedClock, SystemClock};
pub use notify::{ConsoleNotifier, RecordingNotifier};
pub use seed::SeedError;
pub use store::InMemoryPostStore;
