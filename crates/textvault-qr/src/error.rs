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
//! Error types for QR rasterization and decoding

use thiserror::Error;

/// Result type alias for QR operations
pub type QrResult<T> = Result<T, QrError>;

/// Errors that can occur while rasterizing or decoding a QR symbol
#[derive(Error, Debug)]
pub enum QrError {
    /// The payload could not be encoded as a single QR symbol at the
    /// configured error-correction level
    #[error("payload of {len} bytes does not fit a single QR symbol at ECL {ecl:?}")]
    PayloadTooLarge {
        /// payload length in bytes
        len: usize,
        /// error-correction level attempted
        ecl: super::Ecl,
    },

    /// Underlying `qrcode` crate failure during symbol construction
    #[error("QR encode failed: {0}")]
    Encode(String),

    /// Rendering the symbol to a pixel buffer / PNG failed
    #[error("QR render failed: {0}")]
    Render(String),

    /// No QR grid could be located in the supplied bitmap
    #[error("no QR code detected in frame")]
    NotDetected,

    /// A QR grid was located but its payload failed to decode
    #[error("QR grid detected but failed to decode: {0}")]
    Decode(String),

    /// Image loading / encoding I/O failure
    #[error("image I/O error: {0}")]
    Image(#[from] image::ImageError),
}

impl QrError {
    /// True if this is a payload-too-large error
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self, QrError::PayloadTooLarge { .. })
    }
}
