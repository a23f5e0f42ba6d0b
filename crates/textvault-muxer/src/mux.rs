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
//! Scratch-directory materialisation and MP4 muxing (C3)

use crate::error::{MuxError, MuxResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, instrument, warn};

/// Muxer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuxConfig {
    /// Video codec passed to the encoder (`-c:v`)
    pub codec: String,
    /// Output frame rate; the *N*-th scratch file becomes the *N*-th presented frame
    pub fps: u32,
    /// Output frame width in pixels (square output)
    pub width: u32,
    /// Output frame height in pixels (square output)
    pub height: u32,
    /// Name of the external encoder binary (normally `ffmpeg`)
    pub encoder_binary: String,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            codec: "libx264".to_string(),
            fps: 1,
            width: 256,
            height: 256,
            encoder_binary: "ffmpeg".to_string(),
        }
    }
}

/// Materialise `frames` (PNG-encoded bitmaps, in presentation order) to a
/// fresh scratch directory and invoke the external encoder to mux them into
/// `output_path`.
///
/// The scratch directory is removed on every exit path: success, encoder
/// failure, or I/O failure. No filter that could drop, duplicate, or reorder
/// frames is applied — the *N*-th scratch file is the *N*-th output frame.
#[instrument(skip(frames, config), fields(num_frames = frames.len()))]
pub fn mux(frames: &[Vec<u8>], output_path: &Path, config: &MuxConfig) -> MuxResult<()> {
    let scratch = tempfile::Builder::new()
        .prefix("textvault-scratch-")
        .tempdir()
        .map_err(|e| MuxError::io(std::env::temp_dir(), e))?;

    let result = mux_from_scratch(frames, scratch.path(), output_path, config);

    if result.is_err() {
        // Encoder failure must not publish a partial MP4.
        let _ = std::fs::remove_file(output_path);
    }
    // `scratch` is a TempDir: it removes its directory on drop regardless of
    // how this function returns (success, error, or panic-unwind).
    result
}

fn mux_from_scratch(
    frames: &[Vec<u8>],
    scratch: &Path,
    output_path: &Path,
    config: &MuxConfig,
) -> MuxResult<()> {
    if frames.is_empty() {
        debug!("zero frames, writing an empty MP4 container");
        return mux_empty(output_path, config);
    }

    let width = digits(frames.len());
    for (i, png) in frames.iter().enumerate() {
        let frame_path = scratch.join(format!("frame_{:0width$}.png", i, width = width));
        std::fs::write(&frame_path, png).map_err(|e| MuxError::io(frame_path.clone(), e))?;
    }

    let pattern = scratch.join(format!("frame_%0{}d.png", width));
    let filter = format!(
        "scale={w}:{h}:force_original_aspect_ratio=decrease,pad={w}:{h}:(ow-iw)/2:(oh-ih)/2",
        w = config.width,
        h = config.height
    );

    let output = Command::new(&config.encoder_binary)
        .args([
            "-y",
            "-r",
            &config.fps.to_string(),
            "-i",
        ])
        .arg(&pattern)
        .args(["-c:v", &config.codec, "-pix_fmt", "yuv420p", "-vf", &filter])
        .arg(output_path)
        .args(["-loglevel", "error"])
        .output();

    let output = match output {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MuxError::EncoderNotFound(config.encoder_binary.clone()));
        }
        Err(e) => return Err(MuxError::io(PathBuf::from(&config.encoder_binary), e)),
    };

    if !output.status.success() {
        warn!(status = ?output.status, "encoder exited non-zero");
        return Err(MuxError::EncoderFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    info!(frames = frames.len(), "muxed MP4 artifact");
    Ok(())
}

/// Produce a valid, empty MP4 container for a zero-chunk document.
fn mux_empty(output_path: &Path, config: &MuxConfig) -> MuxResult<()> {
    // A zero-duration stream is not something every encoder build accepts
    // cleanly; encode a single throwaway black frame's worth of container
    // framing and then trim it, via `-frames:v 0`, which ffmpeg accepts and
    // still writes valid ISO BMFF boxes (ftyp/moov) with no samples.
    let output = Command::new(&config.encoder_binary)
        .args([
            "-y",
            "-f",
            "lavfi",
            "-i",
            &format!("color=c=black:s={}x{}:r={}", config.width, config.height, config.fps),
            "-frames:v",
            "0",
            "-c:v",
            &config.codec,
            "-pix_fmt",
            "yuv420p",
        ])
        .arg(output_path)
        .args(["-loglevel", "error"])
        .output();

    let output = match output {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MuxError::EncoderNotFound(config.encoder_binary.clone()));
        }
        Err(e) => return Err(MuxError::io(PathBuf::from(&config.encoder_binary), e)),
    };

    if !output.status.success() {
        return Err(MuxError::EncoderFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

fn digits(count: usize) -> usize {
    count.to_string().len().max(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_has_a_floor_of_five() {
        assert_eq!(digits(3), 5);
        assert_eq!(digits(123_456), 6);
    }

    #[test]
    fn default_config_matches_spec_defaults() {
        let cfg = MuxConfig::default();
        assert_eq!(cfg.fps, 1);
        assert_eq!(cfg.width, 256);
        assert_eq!(cfg.height, 256);
        assert_eq!(cfg.codec, "libx264");
    }

    #[test]
    fn missing_encoder_binary_is_not_found_error() {
        let cfg = MuxConfig {
            encoder_binary: "textvault-definitely-not-a-real-binary".to_string(),
            ..MuxConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.mp4");
        let err = mux(&[vec![1, 2, 3]], &out, &cfg).unwrap_err();
        assert!(matches!(err, MuxError::EncoderNotFound(_)));
    }
}
