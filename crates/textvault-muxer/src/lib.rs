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
//! Video muxer and frame-accurate extractor (C3)
//!
//! Binds the chunker/rasterizer output to a concrete MP4 artifact on disk.
//! Three operations, corresponding to §4.3 and §4.5 of the design doc:
//!
//! - [`mux`]: concatenate per-chunk PNG bitmaps into an MP4 whose frame *N*
//!   is the *N*-th input bitmap, via a scratch directory and an external
//!   encoder subprocess.
//! - [`extract_frame`]: pull a single decoded frame back out by frame index.
//! - [`probe`]: read container-level facts (frame count, duration, size)
//!   without invoking the encoder.
//!
//! No long-lived encoder process is shared across calls — each mux or
//! extract spawns a fresh subprocess, trading a little throughput for
//! isolation against codec bugs and cross-request state.

pub mod error;
pub mod extract;
pub mod mux;
pub mod probe;

pub use error::{MuxError, MuxResult};
pub use extract::extract_frame;
pub use mux::{mux, MuxConfig};
pub use probe::{probe, probe_allow_empty, VideoProbe};
