use serde::{Deserialize, Serialize};

/// A tutorial video returned by the video search proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub video_id: String,
    pub link: String,
    pub thumbnail: Option<String>,
    pub channel: String,
    pub description: String,
    pub published_at: Option<String>,
}

impl Video {
    pub fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={video_id}")
    }
}
