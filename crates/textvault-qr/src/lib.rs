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
//! QR rasterizer and decoder (C2)
//!
//! [`rasterize`] renders a chunk's bytes into a square PNG bitmap carrying a
//! single QR symbol. [`decode`] is the inverse: given a bitmap, recover the
//! payload bytes. Encoding and decoding are independent of any particular
//! frame or video — the muxer and retriever crates are the only callers that
//! know about frame numbers.

pub mod error;

pub use error::{QrError, QrResult};

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::{instrument, warn};

/// QR error-correction level, ascending redundancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ecl {
    /// ~7% recoverable
    L,
    /// ~15% recoverable
    M,
    /// ~25% recoverable
    Q,
    /// ~30% recoverable
    H,
}

impl Default for Ecl {
    fn default() -> Self {
        Ecl::M
    }
}

impl Ecl {
    fn to_qrcode_level(self) -> EcLevel {
        match self {
            Ecl::L => EcLevel::L,
            Ecl::M => EcLevel::M,
            Ecl::Q => EcLevel::Q,
            Ecl::H => EcLevel::H,
        }
    }

    /// Parse from the one-letter config string (`L`, `M`, `Q`, `H`), case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Some(Ecl::L),
            "M" => Some(Ecl::M),
            "Q" => Some(Ecl::Q),
            "H" => Some(Ecl::H),
            _ => None,
        }
    }
}

/// Rasterizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Error-correction level
    pub ecl: Ecl,
    /// Whether to render the quiet-zone margin around the symbol. The
    /// `qrcode` crate renders a fixed 4-module quiet zone when enabled;
    /// module-precise margins are not exposed by the chosen crate (see
    /// DESIGN.md).
    pub margin: bool,
    /// Output pixel width (square output: `width == height`)
    pub width: u32,
    /// Output pixel height (square output: `width == height`)
    pub height: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            ecl: Ecl::M,
            margin: true,
            width: 256,
            height: 256,
        }
    }
}

/// Render `payload` into a PNG-encoded square bitmap carrying a single QR symbol.
///
/// Fails with [`QrError::PayloadTooLarge`] if `payload` cannot be encoded in a
/// single QR symbol at `config.ecl` — the caller (the chunker's caller, in
/// practice) is expected to reduce `chunk_size`.
#[instrument(skip(payload, config), fields(len = payload.len()))]
pub fn rasterize(payload: &[u8], config: &RasterConfig) -> QrResult<Vec<u8>> {
    let code = QrCode::with_error_correction_level(payload, config.ecl.to_qrcode_level())
        .map_err(|_| QrError::PayloadTooLarge {
            len: payload.len(),
            ecl: config.ecl,
        })?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(config.margin)
        .min_dimensions(config.width, config.height)
        .max_dimensions(config.width, config.height)
        .build();

    let mut png_bytes = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(QrError::Image)?;

    Ok(png_bytes)
}

/// Decode the QR payload carried by a PNG-encoded bitmap.
///
/// Tries a single pure-Rust decoder (`rqrr`). The function signature leaves
/// room for a fallback decoder to be layered in front of this one without
/// changing callers — see `SPEC_FULL.md`'s note on dual decode fallback.
#[instrument(skip(png_bytes))]
pub fn decode(png_bytes: &[u8]) -> QrResult<Vec<u8>> {
    let img = image::load_from_memory_with_format(png_bytes, ImageFormat::Png)?;
    decode_image(&img)
}

/// Decode the QR payload carried by an already-loaded image (used by the
/// retriever, which extracts frames directly into memory without a PNG round-trip).
#[instrument(skip(img))]
pub fn decode_image(img: &DynamicImage) -> QrResult<Vec<u8>> {
    let luma = img.to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(luma);
    let grids = prepared.detect_grids();

    let grid = grids.into_iter().next().ok_or(QrError::NotDetected)?;
    let (_meta, content) = grid.decode().map_err(|e| {
        warn!(error = %e, "QR grid detected but decode failed");
        QrError::Decode(e.to_string())
    })?;

    Ok(content.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_small_payload() {
        let cfg = RasterConfig::default();
        let payload = b"hello frame-addressable world";
        let png = rasterize(payload, &cfg).unwrap();
        let decoded = decode(&png).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn round_trips_near_chunk_size_payload() {
        let cfg = RasterConfig {
            ecl: Ecl::M,
            ..RasterConfig::default()
        };
        let payload = vec![b'a'; 400];
        let png = rasterize(&payload, &cfg).unwrap();
        let decoded = decode(&png).unwrap();
        assert_eq!(decoded, payload);
    }

    /// Scenario S4: a chunk sized to overflow a single QR symbol at ECL H
    /// must fail fast with PayloadTooLarge.
    #[test]
    fn s4_oversized_payload_is_payload_too_large() {
        let cfg = RasterConfig {
            ecl: Ecl::H,
            ..RasterConfig::default()
        };
        let payload = vec![b'x'; 5000];
        let err = rasterize(&payload, &cfg).unwrap_err();
        assert!(err.is_payload_too_large());
    }

    #[test]
    fn decode_on_blank_image_is_not_detected() {
        let blank = DynamicImage::ImageLuma8(image::GrayImage::new(64, 64));
        let mut buf = Vec::new();
        blank
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        let err = decode(&buf).unwrap_err();
        assert!(matches!(err, QrError::NotDetected));
    }

    #[test]
    fn ecl_parse_roundtrips() {
        for (s, expected) in [("L", Ecl::L), ("m", Ecl::M), ("Q", Ecl::Q), ("h", Ecl::H)] {
            assert_eq!(Ecl::parse(s), Some(expected));
        }
        assert_eq!(Ecl::parse("Z"), None);
    }

    #[test]
    fn raw_bytes_with_invalid_utf8_round_trip() {
        let cfg = RasterConfig::default();
        let payload: Vec<u8> = vec![0xC3, 0x28, 0x41, 0x42, 0xFF, 0xFE];
        let png = rasterize(&payload, &cfg).unwrap();
        let decoded = decode(&png).unwrap();
        assert_eq!(decoded, payload);
    }
}
