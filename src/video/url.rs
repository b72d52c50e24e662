//! YouTube URL parsing.

use std::fmt;

use url::Url;

use crate::{Result, TubetalkError};

/// An 11-character YouTube video id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from the common YouTube URL shapes:
/// `watch?v=`, `youtu.be/`, `shorts/`, and `embed/`.
pub fn parse_video_url(input: &str) -> Result<VideoId> {
    let invalid = || TubetalkError::InvalidUrl(input.to_string());

    let url = Url::parse(input.trim()).map_err(|_| invalid())?;

    let host = url
        .host_str()
        .unwrap_or_default()
        .trim_start_matches("www.")
        .trim_start_matches("m.");

    let candidate = match host {
        "youtu.be" => url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" => {
            if url.path() == "/watch" {
                url.query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned())
            } else {
                let mut segments = url.path_segments().into_iter().flatten();
                match segments.next() {
                    Some("shorts") | Some("embed") => segments.next().map(str::to_string),
                    _ => None,
                }
            }
        }
        _ => None,
    };

    match candidate {
        Some(id) if is_valid_video_id(&id) => Ok(VideoId(id)),
        _ => Err(invalid()),
    }
}

fn is_valid_video_id(id: &str) -> bool {
    id.len() == 11
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
