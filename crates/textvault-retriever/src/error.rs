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
//! The composed error type for the retrieval pipeline
//!
//! Each stage of the pipeline keeps its own `thiserror` enum, and this crate
//! unifies them at the point where it actually orchestrates across stages
//! (`add_document`, `search`).

use thiserror::Error;

/// Result type alias for the retrieval pipeline
pub type TextVaultResult<T> = Result<T, TextVaultError>;

/// Unified error surfacing everything that can go wrong across chunking,
/// rasterizing, muxing, indexing, embedding, and retrieval.
#[derive(Error, Debug)]
pub enum TextVaultError {
    /// Chunker configuration was invalid
    #[error(transparent)]
    Chunk(#[from] textvault_chunker::ChunkError),

    /// QR rasterization or decode failure
    #[error(transparent)]
    Qr(#[from] textvault_qr::QrError),

    /// Muxing, probing, or frame extraction failure
    #[error(transparent)]
    Mux(#[from] textvault_muxer::MuxError),

    /// Vector index backend failure
    #[error(transparent)]
    Index(#[from] textvault_index::IndexError),

    /// The embedder failed to produce a vector for a chunk or query
    #[error("embedder failed: {0}")]
    Embedder(#[source] anyhow::Error),

    /// Filesystem failure not already wrapped by a lower-level crate
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextVaultError {
    /// True if this failure means a chunk could not fit a single QR symbol —
    /// callers are expected to reduce `chunk_size` and retry the whole document.
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self, TextVaultError::Qr(e) if e.is_payload_too_large())
    }

    /// True if this is a video-not-found failure, checked up front before any
    /// codec work begins for a given path.
    pub fn is_video_not_found(&self) -> bool {
        matches!(self, TextVaultError::Mux(textvault_muxer::MuxError::VideoNotFound(_)))
    }
}
