use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn of a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }

    /// Speaker label used when the transcript is replayed into a prompt
    pub fn speaker(&self) -> &'static str {
        if self.is_user {
            "User"
        } else {
            "Assistant"
        }
    }
}
