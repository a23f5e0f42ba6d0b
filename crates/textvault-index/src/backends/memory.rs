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
//! In-memory backend: linear scan over a flat list
//!
//! The simplest conformant backend. Used directly for small corpora and as
//! the storage engine underneath [`super::file::FileBackend`].

use crate::backend::VectorDatabase;
use crate::entry::IndexEntry;
use crate::error::{IndexError, IndexResult};
use crate::similarity::cosine_similarity;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Linear-scan, in-memory vector index
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    entries: Arc<RwLock<Vec<IndexEntry>>>,
}

impl InMemoryBackend {
    /// Construct an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current entries (used by [`super::file::FileBackend`] to persist)
    pub(crate) async fn snapshot(&self) -> Vec<IndexEntry> {
        self.entries.read().await.clone()
    }

    /// Replace the entries wholesale (used by [`super::file::FileBackend`] to load)
    pub(crate) async fn load(&self, entries: Vec<IndexEntry>) {
        *self.entries.write().await = entries;
    }

    fn validate_dimension(existing: &[IndexEntry], incoming: &[IndexEntry]) -> IndexResult<()> {
        let established = existing.first().map(|e| e.embedding.len());
        let mut dim = established;

        for entry in incoming {
            match dim {
                None => dim = Some(entry.embedding.len()),
                Some(expected) if expected != entry.embedding.len() => {
                    return Err(IndexError::DimensionMismatch {
                        expected,
                        actual: entry.embedding.len(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[async_trait]
impl VectorDatabase for InMemoryBackend {
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    async fn upsert(&self, entries: Vec<IndexEntry>) -> IndexResult<()> {
        let mut guard = self.entries.write().await;
        Self::validate_dimension(&guard, &entries)?;
        debug!(count = entries.len(), "appending entries");
        guard.extend(entries);
        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &[f32], k: usize) -> IndexResult<Vec<IndexEntry>> {
        if k == 0 {
            return Ok(Vec::new());
        }

        let guard = self.entries.read().await;
        let mut scored: Vec<IndexEntry> = guard
            .iter()
            .map(|e| {
                let mut e = e.clone();
                e.similarity = Some(cosine_similarity(query, &e.embedding));
                e
            })
            .collect();

        // Descending similarity; ties broken by frame_number for determinism.
        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.frame_number.cmp(&b.frame_number))
        });
        scored.truncate(k);

        Ok(scored)
    }

    async fn delete(&self, document_id: &str) -> IndexResult<()> {
        let mut guard = self.entries.write().await;
        guard.retain(|e| e.document_id != document_id);
        Ok(())
    }

    async fn clear(&self) -> IndexResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn len(&self) -> IndexResult<usize> {
        Ok(self.entries.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(doc: &str, frame: u64, embedding: Vec<f32>) -> IndexEntry {
        IndexEntry::new(b"text".to_vec(), embedding, frame, doc, None)
    }

    #[tokio::test]
    async fn search_with_k_zero_is_empty() {
        let db = InMemoryBackend::new();
        db.upsert(vec![entry("a", 0, vec![1.0, 0.0])]).await.unwrap();
        let hits = db.search(&[1.0, 0.0], 0).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn search_against_empty_store_is_empty_not_error() {
        let db = InMemoryBackend::new();
        let hits = db.search(&[1.0, 0.0], 5).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn search_orders_by_descending_similarity() {
        let db = InMemoryBackend::new();
        db.upsert(vec![
            entry("a", 0, vec![0.0, 1.0]),
            entry("a", 1, vec![1.0, 0.0]),
            entry("a", 2, vec![0.9, 0.1]),
        ])
        .await
        .unwrap();

        let hits = db.search(&[1.0, 0.0], 3).await.unwrap();
        assert_eq!(hits[0].frame_number, 1);
        assert_eq!(hits[1].frame_number, 2);
        assert_eq!(hits[2].frame_number, 0);
    }

    #[tokio::test]
    async fn top_k_monotonicity() {
        let db = InMemoryBackend::new();
        db.upsert(vec![
            entry("a", 0, vec![0.1, 0.9]),
            entry("a", 1, vec![1.0, 0.0]),
            entry("a", 2, vec![0.9, 0.1]),
            entry("a", 3, vec![0.5, 0.5]),
        ])
        .await
        .unwrap();

        let k1 = db.search(&[1.0, 0.0], 2).await.unwrap();
        let k2 = db.search(&[1.0, 0.0], 4).await.unwrap();

        for (a, b) in k1.iter().zip(k2.iter()) {
            assert_eq!(a.frame_number, b.frame_number);
        }
    }

    #[tokio::test]
    async fn delete_removes_only_matching_document() {
        let db = InMemoryBackend::new();
        db.upsert(vec![entry("a", 0, vec![1.0]), entry("b", 0, vec![1.0])])
            .await
            .unwrap();
        db.delete("a").await.unwrap();
        assert_eq!(db.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let db = InMemoryBackend::new();
        db.upsert(vec![entry("a", 0, vec![1.0])]).await.unwrap();
        db.clear().await.unwrap();
        assert!(db.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn rejects_nonuniform_embedding_dimension() {
        let db = InMemoryBackend::new();
        db.upsert(vec![entry("a", 0, vec![1.0, 0.0])]).await.unwrap();
        let err = db.upsert(vec![entry("a", 1, vec![1.0])]).await.unwrap_err();
        assert!(matches!(err, IndexError::DimensionMismatch { .. }));
    }
}
