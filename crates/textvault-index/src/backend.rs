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
//! The `VectorDatabase` contract (C4)
//!
//! Mirrors the capability-set shape of a storage backend trait: a small,
//! async, object-safe interface implemented by concrete variants, with the
//! core depending only on the trait, never on a specific variant.

use crate::entry::IndexEntry;
use crate::error::IndexResult;
use async_trait::async_trait;
use std::fmt::Debug;

/// Vector index backend: persists `(embedding, frame_number, document_id,
/// chunk_text, metadata)` tuples and answers top-*k* cosine queries.
///
/// # Contract
///
/// - `upsert` has append semantics from the core's point of view: a backend
///   *may* deduplicate by `(document_id, frame_number)` if it has a natural
///   way to do so, but callers must never rely on that.
/// - `search` returns up to `k` entries with `similarity` set, ordered by
///   descending cosine similarity. `k = 0` or an empty store both return an
///   empty sequence — never an error.
/// - `delete` and `clear` are optional capabilities; a backend that doesn't
///   support one returns [`crate::IndexError::UnsupportedOperation`].
#[async_trait]
pub trait VectorDatabase: Send + Sync + Debug {
    /// Append entries to the store (see contract note on upsert semantics)
    async fn upsert(&self, entries: Vec<IndexEntry>) -> IndexResult<()>;

    /// Return up to `k` entries nearest to `query` by cosine similarity
    async fn search(&self, query: &[f32], k: usize) -> IndexResult<Vec<IndexEntry>>;

    /// Remove all entries belonging to `document_id`, if supported
    async fn delete(&self, document_id: &str) -> IndexResult<()>;

    /// Remove every entry in the store, if supported
    async fn clear(&self) -> IndexResult<()>;

    /// Number of entries currently stored, for observability
    async fn len(&self) -> IndexResult<usize>;

    /// True if the store holds no entries
    async fn is_empty(&self) -> IndexResult<bool> {
        Ok(self.len().await? == 0)
    }
}
