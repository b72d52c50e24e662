//! Video metadata types and providers.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::video::url::VideoId;

/// How long the mock provider pretends a lookup takes.
const MOCK_FETCH_DELAY: Duration = Duration::from_millis(1500);

/// Fully-populated video metadata as consumers see it.
///
/// Every field is defined; providers hand over a [`RawVideoInfo`] and
/// defaults are substituted in one place.
#[derive(Debug, Clone, Serialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub duration_secs: u32,
    pub views: u64,
    pub likes: u64,
    pub published: NaiveDate,
    pub transcript: String,
    pub formats: Vec<String>,
}

impl VideoInfo {
    /// Duration as `h:mm:ss`, or `m:ss` under an hour.
    pub fn duration_display(&self) -> String {
        let hours = self.duration_secs / 3600;
        let minutes = (self.duration_secs % 3600) / 60;
        let seconds = self.duration_secs % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

/// Provider payload before defaults are applied.
///
/// Fields a provider cannot supply stay `None`; [`RawVideoInfo::into_info`]
/// is the single place where defaults come in.
#[derive(Debug, Clone, Default)]
pub struct RawVideoInfo {
    pub id: String,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration_secs: Option<u32>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub published: Option<NaiveDate>,
    pub transcript: Option<String>,
    pub formats: Vec<String>,
}

impl RawVideoInfo {
    pub fn into_info(self) -> VideoInfo {
        VideoInfo {
            id: self.id,
            title: self.title.unwrap_or_else(|| "Untitled video".to_string()),
            channel: self
                .channel
                .unwrap_or_else(|| "Unknown channel".to_string()),
            duration_secs: self.duration_secs.unwrap_or(0),
            views: self.views.unwrap_or(0),
            likes: self.likes.unwrap_or(0),
            published: self.published.unwrap_or_default(),
            transcript: self.transcript.unwrap_or_default(),
            formats: if self.formats.is_empty() {
                vec!["mp4".to_string()]
            } else {
                self.formats
            },
        }
    }
}

/// Source of video metadata and transcripts.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    async fn fetch(&self, id: &VideoId) -> Result<VideoInfo>;
}

/// Serves a fixed demo payload after a simulated lookup delay.
#[derive(Debug, Default)]
pub struct MockVideoProvider;

impl MockVideoProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VideoProvider for MockVideoProvider {
    async fn fetch(&self, id: &VideoId) -> Result<VideoInfo> {
        tokio::time::sleep(MOCK_FETCH_DELAY).await;

        let raw = RawVideoInfo {
            id: id.as_str().to_string(),
            title: Some("Modern JavaScript: Everything You Need to Know in 2023".to_string()),
            channel: Some("CodeMastery".to_string()),
            duration_secs: Some(1005),
            views: Some(1_245_872),
            likes: Some(87_432),
            published: NaiveDate::from_ymd_opt(2023, 4, 15),
            transcript: Some(DEMO_TRANSCRIPT.to_string()),
            formats: vec!["mp4".to_string(), "webm".to_string(), "mp3".to_string()],
        };

        Ok(raw.into_info())
    }
}

const DEMO_TRANSCRIPT: &str = "Welcome back to the channel! Today we're covering the modern JavaScript features every developer should know in 2023. We'll start with ES6 syntax: arrow functions, template literals, and the let and const declarations that replaced var. Then we'll look at async/await and how it cleans up promise chains when you're fetching data from an API. After that we'll go through the modern array methods, map, filter, and reduce, along with the spread operator and destructuring for both objects and arrays. Finally we'll wrap up with optional chaining and nullish coalescing, two small operators that prevent a whole class of runtime errors when values might be undefined. Let's dive in.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::parse_video_url;

    #[test]
    fn defaults_are_substituted_once_at_the_boundary() {
        let raw = RawVideoInfo {
            id: "dQw4w9WgXcQ".to_string(),
            ..Default::default()
        };

        let info = raw.into_info();
        assert_eq!(info.title, "Untitled video");
        assert_eq!(info.channel, "Unknown channel");
        assert_eq!(info.views, 0);
        assert!(info.transcript.is_empty());
        assert_eq!(info.formats, vec!["mp4".to_string()]);
    }

    #[test]
    fn duration_display_handles_hours() {
        let mut raw = RawVideoInfo {
            id: "dQw4w9WgXcQ".to_string(),
            ..Default::default()
        };
        raw.duration_secs = Some(1005);
        assert_eq!(raw.into_info().duration_display(), "16:45");

        let mut raw = RawVideoInfo {
            id: "dQw4w9WgXcQ".to_string(),
            ..Default::default()
        };
        raw.duration_secs = Some(3725);
        assert_eq!(raw.into_info().duration_display(), "1:02:05");
    }

    #[tokio::test(start_paused = true)]
    async fn mock_provider_returns_a_complete_payload() {
        let id = parse_video_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let info = MockVideoProvider::new().fetch(&id).await.unwrap();

        assert_eq!(info.id, "dQw4w9WgXcQ");
        assert!(!info.transcript.is_empty());
        assert!(info.views > 0);
    }
}
