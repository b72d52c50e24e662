//! Video surface: URL handling and (mocked) metadata.
//!
//! No real YouTube API is involved; the provider seam exists so the rest of
//! the tool works against typed data instead of a grab-bag payload.

mod info;
mod url;

pub use info::{MockVideoProvider, RawVideoInfo, VideoInfo, VideoProvider};
pub use url::{parse_video_url, VideoId};
