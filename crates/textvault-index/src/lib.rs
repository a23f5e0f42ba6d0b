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
//! Vector index (C4)
//!
//! Persists `(embedding, frame_number, document_id, chunk_text, metadata)`
//! tuples and answers top-*k* cosine queries. The contract is identical
//! across backends — see [`VectorDatabase`] — so the core never depends on a
//! concrete variant, only the trait.

pub mod backend;
pub mod backends;
pub mod entry;
pub mod error;
pub mod similarity;

pub use backend::VectorDatabase;
pub use backends::{ExternalBackend, FileBackend, InMemoryBackend};
pub use entry::{IndexEntry, Metadata, MetadataValue};
pub use error::{IndexError, IndexResult};
pub use similarity::cosine_similarity;
