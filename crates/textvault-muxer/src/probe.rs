// Copyright (C) 2026  TextVault Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! MP4 container probing
//!
//! Used to compute [`Stats`](../textvault-retriever) fields (`total_frames`,
//! `duration_seconds`, `video_size_bytes`) without shelling out to the
//! external encoder — container-level metadata (track sample count,
//! timescale, duration) is read directly from the ISO BMFF boxes via the
//! pure-Rust `mp4` crate.

use crate::error::{MuxError, MuxResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::instrument;

/// Probed facts about a muxed MP4 artifact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoProbe {
    /// Total number of video samples (frames) in the single video track
    pub total_frames: u64,
    /// Duration of the video track in seconds
    pub duration_seconds: f64,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Size of the container on disk, in bytes
    pub video_size_bytes: u64,
}

/// Probe `video_path`'s single video track.
///
/// Fails with [`MuxError::VideoNotFound`] if the file does not exist, or
/// [`MuxError::ProbeFailed`] if the container cannot be parsed as MP4.
#[instrument]
pub fn probe(video_path: &Path) -> MuxResult<VideoProbe> {
    if !video_path.exists() {
        return Err(MuxError::VideoNotFound(video_path.to_path_buf()));
    }

    let file = File::open(video_path).map_err(|e| MuxError::io(video_path.to_path_buf(), e))?;
    let video_size_bytes = file
        .metadata()
        .map_err(|e| MuxError::io(video_path.to_path_buf(), e))?
        .len();

    let reader = BufReader::new(file);
    let mp4 = mp4::Mp4Reader::read_header(reader, video_size_bytes)
        .map_err(|e| MuxError::ProbeFailed(e.to_string()))?;

    let track = mp4
        .tracks()
        .values()
        .find(|t| matches!(t.track_type(), Ok(mp4::TrackType::Video)))
        .ok_or_else(|| MuxError::ProbeFailed("no video track in container".to_string()))?;

    let total_frames = track.sample_count() as u64;
    let duration_seconds = track.duration().as_secs_f64();
    let width = track.width() as u32;
    let height = track.height() as u32;

    Ok(VideoProbe {
        total_frames,
        duration_seconds,
        width,
        height,
        video_size_bytes,
    })
}

/// Probe just enough to validate an artifact exists and is a parseable MP4,
/// for an empty (zero-chunk) document where `total_frames == 0` is expected.
pub fn probe_allow_empty(video_path: &Path) -> MuxResult<VideoProbe> {
    match probe(video_path) {
        Ok(p) => Ok(p),
        Err(MuxError::ProbeFailed(_)) => {
            let video_size_bytes = std::fs::metadata(video_path)
                .map_err(|e| MuxError::io(video_path.to_path_buf(), e))?
                .len();
            Ok(VideoProbe {
                total_frames: 0,
                duration_seconds: 0.0,
                width: 0,
                height: 0,
                video_size_bytes,
            })
        }
        Err(e) => Err(e),
    }
}
