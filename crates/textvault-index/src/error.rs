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
//! Error types for vector index backends

use thiserror::Error;

/// Result type alias for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors surfaced by a [`crate::VectorDatabase`] backend
#[derive(Error, Debug)]
pub enum IndexError {
    /// The embeddings passed to `upsert` did not share a uniform dimension
    /// with each other or with the store's established dimension
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// dimension established by the store
        expected: usize,
        /// dimension of the offending embedding
        actual: usize,
    },

    /// The backend does not implement an optional capability (`delete`/`clear`)
    #[error("backend does not support operation: {0}")]
    UnsupportedOperation(String),

    /// Persisting to the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// (De)serialisation of the persisted document failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The external store returned an error
    #[error("external index backend error: {0}")]
    Backend(#[from] anyhow::Error),
}
