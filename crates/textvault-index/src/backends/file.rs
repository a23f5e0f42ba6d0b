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
//! File-backed backend: the in-memory flat list, serialised to disk after
//! every mutation
//!
//! **Not crash-safe.** A process killed mid-write leaves the file in
//! whatever state the last completed `std::fs::write` left it in — there is
//! no write-ahead log or fsync-then-rename here. Intended for development and
//! small corpora, not production durability.

use crate::backend::VectorDatabase;
use crate::backends::memory::InMemoryBackend;
use crate::entry::IndexEntry;
use crate::error::{IndexError, IndexResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Flat-list vector index persisted as a single JSON document
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    inner: InMemoryBackend,
    // Serialises persist() calls so concurrent upserts don't interleave writes.
    write_lock: Mutex<()>,
}

impl FileBackend {
    /// Open (or create) a file-backed index at `path`. If `path` already
    /// exists, its contents are loaded as the starting state.
    #[instrument]
    pub async fn open(path: impl Into<PathBuf>) -> IndexResult<Self> {
        let path = path.into();
        let inner = InMemoryBackend::new();

        if path.exists() {
            let raw = tokio::fs::read(&path).await?;
            if !raw.is_empty() {
                let entries: Vec<IndexEntry> = serde_json::from_slice(&raw)?;
                debug!(count = entries.len(), path = %path.display(), "loaded persisted index");
                inner.load(entries).await;
            }
        }

        Ok(Self {
            path,
            inner,
            write_lock: Mutex::new(()),
        })
    }

    async fn persist(&self) -> IndexResult<()> {
        let _guard = self.write_lock.lock().await;
        let snapshot = self.inner.snapshot().await;
        let json = serde_json::to_vec_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        // Write-then-rename to avoid leaving a half-written document if the
        // process dies mid-write; this is a best-effort improvement, not a
        // crash-safety guarantee (see module docs).
        let tmp_path = self.path.with_extension("tmp");
        if let Err(e) = tokio::fs::write(&tmp_path, &json).await {
            warn!(error = %e, "failed to write index temp file");
            return Err(IndexError::Io(e));
        }
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// Underlying path this backend persists to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl VectorDatabase for FileBackend {
    async fn upsert(&self, entries: Vec<IndexEntry>) -> IndexResult<()> {
        self.inner.upsert(entries).await?;
        self.persist().await
    }

    async fn search(&self, query: &[f32], k: usize) -> IndexResult<Vec<IndexEntry>> {
        self.inner.search(query, k).await
    }

    async fn delete(&self, document_id: &str) -> IndexResult<()> {
        self.inner.delete(document_id).await?;
        self.persist().await
    }

    async fn clear(&self) -> IndexResult<()> {
        self.inner.clear().await?;
        self.persist().await
    }

    async fn len(&self) -> IndexResult<usize> {
        self.inner.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(doc: &str, frame: u64) -> IndexEntry {
        IndexEntry::new(b"hello".to_vec(), vec![1.0, 0.0], frame, doc, None)
    }

    #[tokio::test]
    async fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        {
            let backend = FileBackend::open(&path).await.unwrap();
            backend.upsert(vec![entry("doc-a", 0)]).await.unwrap();
        }

        let reopened = FileBackend::open(&path).await.unwrap();
        assert_eq!(reopened.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let backend = FileBackend::open(&path).await.unwrap();
        backend
            .upsert(vec![entry("doc-a", 0), entry("doc-b", 0)])
            .await
            .unwrap();
        backend.delete("doc-a").await.unwrap();

        let reopened = FileBackend::open(&path).await.unwrap();
        assert_eq!(reopened.len().await.unwrap(), 1);
    }
}
