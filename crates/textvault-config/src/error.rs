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
//! Configuration error types

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `chunk_overlap` was not strictly less than `chunk_size`
    #[error("chunk_overlap ({overlap}) must be strictly less than chunk_size ({size})")]
    InvalidChunking {
        /// configured overlap
        overlap: usize,
        /// configured window size
        size: usize,
    },

    /// An unrecognised error-correction level string was configured
    #[error("unknown qr_error_correction_level: {0} (expected one of L, M, Q, H)")]
    InvalidEcl(String),

    /// A numeric option was zero or negative where a positive value is required
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// offending field name
        field: &'static str,
        /// offending value
        value: f64,
    },

    /// The configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// path that failed to read
        path: String,
        /// underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file's format could not be parsed
    #[error("failed to parse config file {path} as {format}: {source}")]
    Parse {
        /// path that failed to parse
        path: String,
        /// format that parsing was attempted with (`toml` or `yaml`)
        format: &'static str,
        /// underlying parse error
        source: anyhow::Error,
    },

    /// The configuration file's extension did not map to a known format
    #[error("cannot infer config format from extension: {0}")]
    UnknownFormat(String),
}
