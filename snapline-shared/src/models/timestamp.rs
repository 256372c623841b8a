use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RFC 3339 timestamp as exchanged with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Render the timestamp for display.
    #[must_use]
    pub fn display(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
