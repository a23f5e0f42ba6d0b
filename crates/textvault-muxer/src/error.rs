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
//! Error types for muxing, probing, and frame extraction

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for muxer operations
pub type MuxResult<T> = Result<T, MuxError>;

/// Errors that can occur while muxing, probing, or extracting frames
#[derive(Error, Debug)]
pub enum MuxError {
    /// The external video encoder binary could not be found on `PATH`
    #[error("video encoder binary not found: {0}")]
    EncoderNotFound(String),

    /// The external video encoder exited non-zero
    #[error("video encoder failed: {stderr}")]
    EncoderFailed {
        /// captured standard error from the subprocess
        stderr: String,
    },

    /// Filesystem or pipe failure
    #[error("I/O error at {path}: {source}")]
    Io {
        /// path involved in the failure
        path: PathBuf,
        /// underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The requested MP4 file does not exist
    #[error("video not found: {0}")]
    VideoNotFound(PathBuf),

    /// The MP4 container could not be parsed while probing
    #[error("failed to probe MP4 container: {0}")]
    ProbeFailed(String),

    /// A frame extraction produced no image data (e.g. seek past end of stream)
    #[error("no frame produced for frame_number {0}")]
    FrameNotProduced(u64),
}

impl MuxError {
    /// Wrap an I/O error with the path that triggered it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MuxError::Io {
            path: path.into(),
            source,
        }
    }
}
