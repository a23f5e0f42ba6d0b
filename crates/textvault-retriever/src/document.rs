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
//! Transient result and reporting types (§3 of the design doc)

use serde::{Deserialize, Serialize};
use textvault_index::Metadata;

/// One hit returned from [`crate::Retriever::search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Decoded chunk text. Verified at decode time to equal the index's
    /// stored `chunk_text`; the stored value remains authoritative, so a
    /// mismatch is not surfaced here as an error (§4.5).
    pub chunk_text: Vec<u8>,
    /// Cosine similarity to the query, in `[-1, 1]`
    pub similarity: f32,
    /// Frame number this result was decoded from
    pub frame_number: u64,
    /// Document the chunk belongs to
    pub document_id: String,
    /// Metadata carried on the index entry, if any
    pub metadata: Option<Metadata>,
}

/// Reporting facts about one document's artifact (§3: produced on demand,
/// never persisted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of chunks the source text re-chunks to
    pub total_chunks: usize,
    /// Number of frames in the muxed MP4 (from probing)
    pub total_frames: u64,
    /// Size of the MP4 container on disk, in bytes
    pub video_size_bytes: u64,
    /// Size of the original source text, in bytes
    pub original_size_bytes: u64,
    /// `video_size_bytes / original_size_bytes`
    pub compression_ratio: f64,
    /// Duration of the video track, in seconds
    pub duration_seconds: f64,
}

impl Stats {
    /// Compute `compression_ratio`, defined as 0.0 when the source text is empty.
    pub fn compression_ratio(video_size_bytes: u64, original_size_bytes: u64) -> f64 {
        if original_size_bytes == 0 {
            0.0
        } else {
            video_size_bytes as f64 / original_size_bytes as f64
        }
    }
}
