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
//! `VaultConfig` schema (§6 of the design doc)

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// QR error-correction level, mirrored here (rather than depending on
/// `textvault-qr`) so this crate can stay a leaf dependency other crates load early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EclLevel {
    /// ~7% recoverable
    L,
    /// ~15% recoverable
    M,
    /// ~25% recoverable
    Q,
    /// ~30% recoverable
    H,
}

impl Default for EclLevel {
    fn default() -> Self {
        EclLevel::M
    }
}

impl std::str::FromStr for EclLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(EclLevel::L),
            "M" => Ok(EclLevel::M),
            "Q" => Ok(EclLevel::Q),
            "H" => Ok(EclLevel::H),
            other => Err(ConfigError::InvalidEcl(other.to_string())),
        }
    }
}

/// Square pixel resolution for rasterized QR frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResolution {
    /// Frame width and height in pixels
    pub side: u32,
}

impl Default for VideoResolution {
    fn default() -> Self {
        Self { side: 256 }
    }
}

/// All recognised configuration options, with the defaults from §6 of the
/// design doc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Window size in source bytes
    pub chunk_size: usize,

    /// Overlap between consecutive windows, in bytes (`< chunk_size`)
    pub chunk_overlap: usize,

    /// Output MP4 frame rate; used for timestamp/frame conversion on seek
    pub video_fps: u32,

    /// QR error-correction level
    pub qr_error_correction_level: EclLevel,

    /// Output frame pixel dimensions (square)
    pub video_resolution: VideoResolution,

    /// Emit progress traces (maps to a `tracing` level floor, not a separate
    /// print path — see `textvault-observability`)
    pub verbose: bool,

    /// LRU cache capacity for decoded frames, in the retriever
    pub max_cache_size: usize,

    /// Degree of parallelism for the per-chunk rasterize+embed fan-out.
    /// `None` means "number of cores" (the documented default).
    pub parallelism: Option<usize>,

    /// Path to the external video encoder binary
    pub encoder_binary: String,

    /// Timeout, in seconds, for calls to the embedder
    pub embedder_timeout_secs: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            video_fps: 1,
            qr_error_correction_level: EclLevel::M,
            video_resolution: VideoResolution::default(),
            verbose: false,
            max_cache_size: 50,
            parallelism: None,
            encoder_binary: "ffmpeg".to_string(),
            embedder_timeout_secs: 30,
        }
    }
}

impl VaultConfig {
    /// Validate every invariant named in §7 of the design doc, refusing
    /// construction if any is violated.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::InvalidChunking {
                overlap: self.chunk_overlap,
                size: self.chunk_size,
            });
        }
        if self.video_fps == 0 {
            return Err(ConfigError::NotPositive {
                field: "video_fps",
                value: self.video_fps as f64,
            });
        }
        if self.video_resolution.side == 0 {
            return Err(ConfigError::NotPositive {
                field: "video_resolution.side",
                value: self.video_resolution.side as f64,
            });
        }
        if self.max_cache_size == 0 {
            return Err(ConfigError::NotPositive {
                field: "max_cache_size",
                value: self.max_cache_size as f64,
            });
        }
        Ok(())
    }

    /// Effective degree of parallelism: configured value, or available
    /// parallelism as reported by the runtime.
    pub fn effective_parallelism(&self) -> usize {
        self.parallelism
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let cfg = VaultConfig::default();
        assert_eq!(cfg.chunk_size, 500);
        assert_eq!(cfg.chunk_overlap, 50);
        assert_eq!(cfg.video_fps, 1);
        assert_eq!(cfg.qr_error_correction_level, EclLevel::M);
        assert_eq!(cfg.video_resolution.side, 256);
        assert!(!cfg.verbose);
        assert_eq!(cfg.max_cache_size, 50);
    }

    #[test]
    fn defaults_are_valid() {
        VaultConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_overlap_ge_size() {
        let cfg = VaultConfig {
            chunk_size: 10,
            chunk_overlap: 10,
            ..VaultConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidChunking { .. })
        ));
    }

    #[test]
    fn rejects_zero_fps() {
        let cfg = VaultConfig {
            video_fps: 0,
            ..VaultConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { .. })));
    }

    #[test]
    fn ecl_parses_case_insensitively() {
        assert_eq!("m".parse::<EclLevel>().unwrap(), EclLevel::M);
        assert_eq!("H".parse::<EclLevel>().unwrap(), EclLevel::H);
        assert!("z".parse::<EclLevel>().is_err());
    }
}
