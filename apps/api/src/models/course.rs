use serde::{Deserialize, Serialize};

/// A learning resource surfaced by the course search proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub platform: String,
    pub is_free: bool,
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
        platform: impl Into<String>,
        is_free: bool,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
            platform: platform.into(),
            is_free,
        }
    }
}
