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
//! Query-to-frame retrieval (C5): the orchestrator that binds C1–C4 into the
//! bidirectional pipeline the design doc calls "the core".
//!
//! [`Retriever::add_document`] drives the encode side (chunk → rasterize +
//! embed in parallel → mux → index), and [`Retriever::search`] /
//! [`Retriever::search_multiple`] drive the retrieval side (embed → index
//! search → extract + decode, cached). Both sides depend only on the
//! [`Embedder`] and `textvault_index::VectorDatabase` contracts, never a
//! concrete variant.

pub mod cache;
pub mod document;
pub mod embedder;
pub mod error;

pub use cache::{CacheStats, FrameCache};
pub use document::{SearchResult, Stats};
pub use embedder::Embedder;
pub use error::{TextVaultError, TextVaultResult};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use textvault_chunker::{Chunk, Chunker, ChunkerConfig};
use textvault_config::VaultConfig;
use textvault_index::{IndexEntry, Metadata, MetadataValue, VectorDatabase};
use textvault_muxer::{MuxConfig, MuxError};
use textvault_qr::{Ecl, RasterConfig};
use tokio::sync::Semaphore;
use tracing::{debug, instrument, warn};

/// Orchestrates the encode and retrieval pipelines over one configuration.
///
/// Holds a bounded frame cache (single instance, shared across concurrent
/// `search` calls via interior `RwLock`s in [`FrameCache`] — see §5's "shared
/// resources" note) and `Arc` handles to the two external collaborators the
/// core depends on only through their trait objects.
#[derive(Clone)]
pub struct Retriever {
    index: Arc<dyn VectorDatabase>,
    embedder: Arc<dyn Embedder>,
    cache: FrameCache,
    config: VaultConfig,
}

impl Retriever {
    /// Build a retriever over the given index backend, embedder, and
    /// configuration. The frame cache capacity is `config.max_cache_size`.
    pub fn new(index: Arc<dyn VectorDatabase>, embedder: Arc<dyn Embedder>, config: VaultConfig) -> Self {
        let cache = FrameCache::new(config.max_cache_size);
        Self {
            index,
            embedder,
            cache,
            config,
        }
    }

    fn raster_config(&self) -> RasterConfig {
        RasterConfig {
            ecl: ecl_level_to_qr_ecl(self.config.qr_error_correction_level),
            margin: true,
            width: self.config.video_resolution.side,
            height: self.config.video_resolution.side,
        }
    }

    fn mux_config(&self) -> MuxConfig {
        MuxConfig {
            fps: self.config.video_fps,
            width: self.config.video_resolution.side,
            height: self.config.video_resolution.side,
            encoder_binary: self.config.encoder_binary.clone(),
            ..MuxConfig::default()
        }
    }

    /// Add a document as an atomic unit: chunk, rasterize + embed each chunk
    /// in parallel, mux the bitmaps into `video_path`, then upsert the
    /// resulting entries. Mux always precedes index (§4.6: `INDEXED` without
    /// `MUXED` is irrecoverable; the reverse is merely rebuildable).
    #[instrument(skip(self, text), fields(document_id, len = text.len()))]
    pub async fn add_document(&self, document_id: &str, text: &[u8], video_path: &Path) -> TextVaultResult<()> {
        let chunker = Chunker::new(ChunkerConfig {
            chunk_size: self.config.chunk_size,
            chunk_overlap: self.config.chunk_overlap,
        })?;
        let chunks = chunker.chunk(text);

        if chunks.is_empty() {
            debug!("empty document, muxing an empty MP4 container and writing no index entries");
            textvault_muxer::mux(&[], video_path, &self.mux_config())?;
            return Ok(());
        }

        let bitmaps = self.rasterize_fan_out(&chunks)?;
        let embeddings = self.embed_fan_out(&chunks).await?;

        textvault_muxer::mux(&bitmaps, video_path, &self.mux_config())?;

        let entries = chunks
            .iter()
            .zip(embeddings.into_iter())
            .map(|(chunk, embedding)| {
                let metadata = (chunk.index == 0).then(|| {
                    let mut m = Metadata::new();
                    m.insert("video_fps".to_string(), MetadataValue::Number(self.config.video_fps as f64));
                    m
                });
                IndexEntry::new(chunk.text.clone(), embedding, chunk.index, document_id, metadata)
            })
            .collect();

        self.index.upsert(entries).await?;
        Ok(())
    }

    /// Rasterize every chunk's text into a PNG bitmap, bounded by the
    /// configured degree of parallelism (default: number of cores). CPU-bound
    /// work, so this runs on a scoped `rayon` pool rather than tokio tasks.
    fn rasterize_fan_out(&self, chunks: &[Chunk]) -> TextVaultResult<Vec<Vec<u8>>> {
        let raster_config = self.raster_config();
        let parallelism = self.config.effective_parallelism();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .build()
            .map_err(|e| TextVaultError::Embedder(anyhow::anyhow!("failed to build rasterizer pool: {e}")))?;

        pool.install(|| {
            use rayon::prelude::*;
            chunks
                .par_iter()
                .map(|chunk| textvault_qr::rasterize(&chunk.text, &raster_config).map_err(TextVaultError::from))
                .collect()
        })
    }

    /// Embed every chunk's text, bounded by the configured degree of
    /// parallelism. I/O-bound (network embedder calls), so this runs as
    /// semaphore-bounded async tasks rather than a thread pool; results are
    /// reassembled in chunk-index order before muxing.
    async fn embed_fan_out(&self, chunks: &[Chunk]) -> TextVaultResult<Vec<Vec<f32>>> {
        let permits = Arc::new(Semaphore::new(self.config.effective_parallelism().max(1)));
        let mut tasks = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            let embedder = self.embedder.clone();
            let permits = permits.clone();
            let text = chunk.text_lossy().into_owned();
            tasks.push(tokio::spawn(async move {
                let _permit = permits.acquire_owned().await.expect("semaphore never closed");
                embedder.embed(&text).await
            }));
        }

        let mut embeddings = Vec::with_capacity(tasks.len());
        for task in tasks {
            let embedding = task
                .await
                .map_err(|e| TextVaultError::Embedder(anyhow::anyhow!("embed task panicked: {e}")))?
                .map_err(TextVaultError::Embedder)?;
            embeddings.push(embedding);
        }
        Ok(embeddings)
    }

    /// Embed `query`, consult the index, extract and decode the named frames
    /// from `video_path` (cached), and return results in descending
    /// similarity order. Per-frame extraction/decode failures are absorbed —
    /// the offending hit is dropped, never surfaced as an error (§4.5).
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &str, video_path: &Path, k: usize) -> TextVaultResult<Vec<SearchResult>> {
        if !video_path.exists() {
            return Err(MuxError::VideoNotFound(video_path.to_path_buf()).into());
        }

        let q_vec = self.embedder.embed(query).await.map_err(TextVaultError::Embedder)?;
        let hits = self.index.search(&q_vec, k).await?;

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            match self.decode_hit(video_path, hit.frame_number).await {
                Ok(decoded) => {
                    if decoded != hit.chunk_text {
                        warn!(
                            frame_number = hit.frame_number,
                            "decoded QR payload does not match stored chunk_text; stored text is authoritative"
                        );
                    }
                    results.push(SearchResult {
                        chunk_text: decoded,
                        similarity: hit.similarity.unwrap_or(0.0),
                        frame_number: hit.frame_number,
                        document_id: hit.document_id,
                        metadata: hit.metadata,
                    });
                }
                Err(e) => {
                    warn!(frame_number = hit.frame_number, error = %e, "dropping hit: frame extraction or decode failed");
                }
            }
        }

        Ok(results)
    }

    /// Run [`Retriever::search`] against each path, concatenate, and re-sort
    /// by descending similarity. Each path independently contributes up to
    /// `k` hits — this is not a single top-*k* across all paths.
    #[instrument(skip(self, query, video_paths))]
    pub async fn search_multiple(&self, query: &str, video_paths: &[PathBuf], k: usize) -> TextVaultResult<Vec<SearchResult>> {
        let mut all = Vec::new();
        for path in video_paths {
            all.extend(self.search(query, path, k).await?);
        }
        all.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal));
        Ok(all)
    }

    async fn decode_hit(&self, video_path: &Path, frame_number: u64) -> TextVaultResult<Vec<u8>> {
        let key = FrameCache::key(video_path, frame_number);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached.into_bytes());
        }

        let png = textvault_muxer::extract_frame(video_path, frame_number, &self.config.encoder_binary)?;
        let decoded = textvault_qr::decode(&png)?;

        self.cache.put(key, String::from_utf8_lossy(&decoded).into_owned()).await;
        Ok(decoded)
    }

    /// Remove every entry belonging to `document_id` from the index.
    pub async fn delete_document(&self, document_id: &str) -> TextVaultResult<()> {
        self.index.delete(document_id).await?;
        Ok(())
    }

    /// Remove every entry from the index and clear the frame cache.
    pub async fn clear(&self) -> TextVaultResult<()> {
        self.index.clear().await?;
        self.cache.clear().await;
        Ok(())
    }

    /// Compute [`Stats`] for a document by re-chunking its source text
    /// (chunking is deterministic — §3's data model) and probing the muxed
    /// artifact on disk.
    pub fn stats(&self, text: &[u8], video_path: &Path) -> TextVaultResult<Stats> {
        let chunker = Chunker::new(ChunkerConfig {
            chunk_size: self.config.chunk_size,
            chunk_overlap: self.config.chunk_overlap,
        })?;
        let total_chunks = chunker.chunk(text).len();
        let probe = textvault_muxer::probe_allow_empty(video_path)?;

        Ok(Stats {
            total_chunks,
            total_frames: probe.total_frames,
            video_size_bytes: probe.video_size_bytes,
            original_size_bytes: text.len() as u64,
            compression_ratio: Stats::compression_ratio(probe.video_size_bytes, text.len() as u64),
            duration_seconds: probe.duration_seconds,
        })
    }

    /// Current `{size, capacity}` snapshot of the frame cache.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

fn ecl_level_to_qr_ecl(level: textvault_config::EclLevel) -> Ecl {
    match level {
        textvault_config::EclLevel::L => Ecl::L,
        textvault_config::EclLevel::M => Ecl::M,
        textvault_config::EclLevel::Q => Ecl::Q,
        textvault_config::EclLevel::H => Ecl::H,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use textvault_index::InMemoryBackend;
    use textvault_test_utils::identity_embedder;

    fn test_config() -> VaultConfig {
        VaultConfig {
            chunk_size: 10,
            chunk_overlap: 2,
            parallelism: Some(2),
            ..VaultConfig::default()
        }
    }

    fn fake_video(dir: &Path) -> PathBuf {
        let path = dir.join("doc.mp4");
        std::fs::write(&path, b"not a real mp4, existence is all search() checks").unwrap();
        path
    }

    #[tokio::test]
    async fn search_against_empty_index_returns_empty() {
        let retriever = Retriever::new(
            Arc::new(InMemoryBackend::new()),
            identity_embedder(8),
            test_config(),
        );
        let dir = tempfile::tempdir().unwrap();
        let video = fake_video(dir.path());

        let results = retriever.search("anything", &video, 5).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_against_missing_video_is_video_not_found() {
        let retriever = Retriever::new(
            Arc::new(InMemoryBackend::new()),
            identity_embedder(8),
            test_config(),
        );
        let err = retriever
            .search("anything", Path::new("/no/such/video.mp4"), 5)
            .await
            .unwrap_err();
        assert!(err.is_video_not_found());
    }

    #[tokio::test]
    async fn embed_fan_out_preserves_chunk_order() {
        let retriever = Retriever::new(
            Arc::new(InMemoryBackend::new()),
            identity_embedder(4),
            test_config(),
        );
        let chunker = Chunker::new(ChunkerConfig {
            chunk_size: 4,
            chunk_overlap: 1,
        })
        .unwrap();
        let chunks = chunker.chunk(b"abcdefghijklmnop");

        let embeddings = retriever.embed_fan_out(&chunks).await.unwrap();
        assert_eq!(embeddings.len(), chunks.len());
    }

    #[tokio::test]
    async fn cache_stats_reports_configured_capacity() {
        let retriever = Retriever::new(
            Arc::new(InMemoryBackend::new()),
            identity_embedder(4),
            test_config(),
        );
        let stats = retriever.cache_stats().await;
        assert_eq!(stats.capacity, VaultConfig::default().max_cache_size);
    }

    /// Records how many times `embed` is actually invoked, to exercise the
    /// bounded-parallelism fan-out without a network dependency.
    struct CountingEmbedder {
        calls: AtomicUsize,
        dim: usize,
    }

    #[async_trait::async_trait]
    impl Embedder for CountingEmbedder {
        async fn embed(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.0; self.dim])
        }

        fn dimension(&self) -> usize {
            self.dim
        }
    }

    #[tokio::test]
    async fn embed_fan_out_calls_embedder_once_per_chunk() {
        let embedder = Arc::new(CountingEmbedder {
            calls: AtomicUsize::new(0),
            dim: 4,
        });
        let retriever = Retriever::new(Arc::new(InMemoryBackend::new()), embedder.clone(), test_config());
        let chunker = Chunker::new(ChunkerConfig {
            chunk_size: 4,
            chunk_overlap: 1,
        })
        .unwrap();
        let chunks = chunker.chunk(b"abcdefghijklmnop");
        let count = chunks.len();

        retriever.embed_fan_out(&chunks).await.unwrap();
        assert_eq!(embedder.calls.load(Ordering::SeqCst), count);
    }
}
