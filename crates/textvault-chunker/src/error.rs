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
//! Error types for the chunker

use thiserror::Error;

/// Result type alias for chunker operations
pub type ChunkResult<T> = Result<T, ChunkError>;

/// Errors that can occur while configuring or running the chunker
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    /// `chunk_overlap` was not strictly less than `chunk_size`
    #[error("chunk_overlap ({overlap}) must be strictly less than chunk_size ({size})")]
    Config {
        /// configured overlap
        overlap: usize,
        /// configured window size
        size: usize,
    },
}

impl ChunkError {
    /// True if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, ChunkError::Config { .. })
    }
}
