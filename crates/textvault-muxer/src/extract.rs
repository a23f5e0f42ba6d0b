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
//! Frame-accurate extraction from a muxed MP4
//!
//! Extraction seeks by **frame index**, not timestamp: the select filter
//! `select='eq(n,N)'` asks the decoder for the *N*-th decoded frame in
//! presentation order directly, sidestepping the rounding hazard that
//! timestamp-based seeking has at low frame rates (§9 of the design doc —
//! "Frame-seek correctness"). `video_fps` is therefore not needed by
//! extraction itself; it is retained in [`MuxConfig`] only for muxing and for
//! `Stats::duration_seconds`.

use crate::error::{MuxError, MuxResult};
use std::path::Path;
use std::process::Command;
use tracing::instrument;

/// Extract the `frame_number`-th decoded frame (0-indexed, presentation
/// order) from `video_path` as a PNG-encoded bitmap.
///
/// Fails with [`MuxError::VideoNotFound`] if `video_path` does not exist,
/// checked before any subprocess work begins.
#[instrument(skip(encoder_binary))]
pub fn extract_frame(
    video_path: &Path,
    frame_number: u64,
    encoder_binary: &str,
) -> MuxResult<Vec<u8>> {
    if !video_path.exists() {
        return Err(MuxError::VideoNotFound(video_path.to_path_buf()));
    }

    let select = format!("select=eq(n\\,{})", frame_number);

    let output = Command::new(encoder_binary)
        .arg("-i")
        .arg(video_path)
        .args([
            "-vf",
            &select,
            "-vsync",
            "vfr",
            "-frames:v",
            "1",
            "-f",
            "image2pipe",
            "-vcodec",
            "png",
            "-loglevel",
            "error",
            "pipe:1",
        ])
        .output();

    let output = match output {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MuxError::EncoderNotFound(encoder_binary.to_string()));
        }
        Err(e) => return Err(MuxError::io(video_path.to_path_buf(), e)),
    };

    if !output.status.success() {
        return Err(MuxError::EncoderFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    if output.stdout.is_empty() {
        return Err(MuxError::FrameNotProduced(frame_number));
    }

    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_video_is_video_not_found() {
        let err = extract_frame(Path::new("/no/such/file.mp4"), 0, "ffmpeg").unwrap_err();
        assert!(matches!(err, MuxError::VideoNotFound(_)));
    }
}
