use chrono::{DateTime, Utc};

/// Source of the current instant, used to stamp published posts.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
