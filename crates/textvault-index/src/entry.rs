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
//! The unit persisted by the vector index (C4's data model)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A metadata value: anything string-serialisable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// String value
    String(String),
    /// Numeric value (stored as f64, covers both ints and floats)
    Number(f64),
    /// Boolean value
    Bool(bool),
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::Number(n)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Bool(b)
    }
}

/// Key-value metadata attached to an [`IndexEntry`]
pub type Metadata = HashMap<String, MetadataValue>;

/// The unit persisted by the vector index: one embedded chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The chunk's authoritative text
    pub chunk_text: Vec<u8>,

    /// Fixed-length embedding vector; length must be uniform within a store
    pub embedding: Vec<f32>,

    /// Frame number this chunk was encoded to (0-indexed, presentation order)
    pub frame_number: u64,

    /// Opaque document identifier
    pub document_id: String,

    /// Optional key-value metadata
    pub metadata: Option<Metadata>,

    /// Cosine similarity to a query, populated only in search results
    pub similarity: Option<f32>,
}

impl IndexEntry {
    /// Construct an entry with no similarity set (as written at encode time)
    pub fn new(
        chunk_text: Vec<u8>,
        embedding: Vec<f32>,
        frame_number: u64,
        document_id: impl Into<String>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            chunk_text,
            embedding,
            frame_number,
            document_id: document_id.into(),
            metadata,
            similarity: None,
        }
    }
}
