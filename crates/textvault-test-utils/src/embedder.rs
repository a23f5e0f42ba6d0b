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
//! Mock embedders for tests that need deterministic vectors without a
//! network dependency.

use async_trait::async_trait;
use std::sync::Arc;
use textvault_retriever::Embedder;

/// A deterministic, hash-based embedder: `embed(x)` always returns the same
/// vector for the same `x`, so round-trip tests are reproducible without
/// calling out to a real embedding provider.
///
/// Not identity-preserving in the cosine-similarity sense (two different
/// inputs are not guaranteed low-similarity) — for tests that need "query
/// identical to an indexed chunk scores highest" (scenario S2), use
/// [`identity_embedder`] instead.
pub struct MockEmbedder {
    dimension: usize,
}

impl MockEmbedder {
    /// Build a mock embedder producing vectors of `dimension` floats.
    pub fn new(dimension: usize) -> Arc<Self> {
        Arc::new(Self { dimension })
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let hash = blake3::hash(text.as_bytes());
        let bytes = hash.as_bytes();
        let vec = (0..self.dimension)
            .map(|i| {
                let byte = bytes[i % bytes.len()];
                (byte as f32 / 255.0) * 2.0 - 1.0
            })
            .collect();
        Ok(vec)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// An identity-preserving mock embedder: `embed(x)` maps each distinct input
/// to an orthogonal-ish one-hot-like vector derived from its hash, so
/// `cosine_similarity(embed(x), embed(x)) == 1.0` and unrelated inputs score
/// far lower. Used for scenario S2 ("search for the text returns it at frame
/// 0 with similarity >= 0.99").
struct IdentityEmbedder {
    dimension: usize,
}

#[async_trait]
impl Embedder for IdentityEmbedder {
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let hash = blake3::hash(text.as_bytes());
        let bytes = hash.as_bytes();
        let mut vec = vec![0.0f32; self.dimension];
        for (i, slot) in vec.iter_mut().enumerate() {
            *slot = bytes[i % bytes.len()] as f32;
        }
        let norm: f32 = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vec {
                *v /= norm;
            }
        }
        Ok(vec)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Build an [`Embedder`] guaranteeing `embed(x)` always returns the same
/// unit vector for the same `x`, and different inputs hash to different
/// directions with overwhelming probability.
pub fn identity_embedder(dimension: usize) -> Arc<dyn Embedder> {
    Arc::new(IdentityEmbedder { dimension })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_embedder_is_deterministic() {
        let embedder = identity_embedder(16);
        let a = embedder.embed("hello world").await.unwrap();
        let b = embedder.embed("hello world").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn identity_embedder_distinguishes_inputs() {
        let embedder = identity_embedder(16);
        let a = embedder.embed("hello world").await.unwrap();
        let b = embedder.embed("goodbye world").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn mock_embedder_respects_dimension() {
        let embedder = MockEmbedder::new(32);
        let v = embedder.embed("anything").await.unwrap();
        assert_eq!(v.len(), 32);
        assert_eq!(embedder.dimension(), 32);
    }
}
