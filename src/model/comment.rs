use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user comment attached to a match, newest first as served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub match_id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
}
