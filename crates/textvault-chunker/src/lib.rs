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
//! Sliding-window chunker (C1)
//!
//! Slices source text into an ordered sequence of overlapping [`Chunk`]s. Each
//! chunk's `index` is the frame number that will later carry it in the muxed
//! MP4 — the chunker is the single source of truth for that numbering, and
//! [`chunk`] is a pure function: identical input and [`ChunkerConfig`] always
//! produce identical output.
//!
//! # Boundary discipline
//!
//! Chunk boundaries are cut on **bytes** of the UTF-8 source, not Unicode
//! scalar values. A chunk boundary can therefore land inside a multi-byte
//! codepoint. This is deliberate: the QR payload (§4.2 of the design) carries
//! raw bytes in byte mode, so a split codepoint round-trips correctly even
//! though it is briefly not valid UTF-8 on its own. Reassembly (concatenating
//! chunks and trimming the overlap) always recovers the original byte stream.

pub mod error;

pub use error::{ChunkError, ChunkResult};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A contiguous slice of source text with a stable index equal to its frame number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk's text content (raw bytes of the source, not necessarily valid UTF-8 alone)
    pub text: Vec<u8>,

    /// Index of this chunk, equal to the frame number that will encode it
    pub index: u64,

    /// Start byte offset in the source text (inclusive)
    pub start_offset: usize,

    /// End byte offset in the source text (exclusive)
    pub end_offset: usize,
}

impl Chunk {
    /// Length of this chunk's text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if this chunk carries no bytes
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Lossily render this chunk's bytes as UTF-8 (for logging / display only;
    /// the authoritative bytes are in [`Chunk::text`])
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// Chunker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Window size in bytes
    pub chunk_size: usize,
    /// Overlap between consecutive windows, in bytes (`< chunk_size`)
    pub chunk_overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }
}

impl ChunkerConfig {
    /// Validate the configuration, returning [`ChunkError::Config`] if
    /// `chunk_overlap` is not strictly less than `chunk_size` (a zero or
    /// negative stride would loop forever).
    pub fn validate(&self) -> ChunkResult<()> {
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkError::Config {
                overlap: self.chunk_overlap,
                size: self.chunk_size,
            });
        }
        Ok(())
    }

    /// The stride between the start of consecutive windows
    fn stride(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }
}

/// Stateless sliding-window chunker
#[derive(Debug, Clone, Copy, Default)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Build a chunker from a validated configuration
    pub fn new(config: ChunkerConfig) -> ChunkResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Chunker's configuration
    pub fn config(&self) -> ChunkerConfig {
        self.config
    }

    /// Slice `text` into an ordered sequence of chunks.
    ///
    /// Empty input produces an empty sequence — this is a successful no-op,
    /// not an error: the encoder treats it as producing zero frames and a
    /// valid, empty MP4 container.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn chunk(&self, text: &[u8]) -> Vec<Chunk> {
        chunk_with(text, &self.config)
    }
}

/// Free function form of [`Chunker::chunk`] for callers that only have a
/// config and don't want to construct a `Chunker` (e.g. property tests).
///
/// # Panics
///
/// Panics if `config` is invalid. Prefer [`Chunker::new`] + [`Chunker::chunk`]
/// in production code, which validates once at construction time.
pub fn chunk_with(text: &[u8], config: &ChunkerConfig) -> Vec<Chunk> {
    assert!(
        config.chunk_overlap < config.chunk_size,
        "chunk_overlap must be < chunk_size"
    );

    if text.is_empty() {
        debug!("empty input, producing zero chunks");
        return Vec::new();
    }

    let stride = config.stride();
    let len = text.len();
    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut index = 0u64;

    while start < len {
        let end = (start + config.chunk_size).min(len);
        chunks.push(Chunk {
            text: text[start..end].to_vec(),
            index,
            start_offset: start,
            end_offset: end,
        });
        index += 1;
        start += stride;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        ChunkerConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_overlap_ge_size() {
        let cfg = ChunkerConfig {
            chunk_size: 10,
            chunk_overlap: 10,
        };
        assert!(cfg.validate().unwrap_err().is_config());

        let cfg = ChunkerConfig {
            chunk_size: 10,
            chunk_overlap: 11,
        };
        assert!(cfg.validate().unwrap_err().is_config());
    }

    #[test]
    fn empty_input_is_empty_output() {
        let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
        assert!(chunker.chunk(b"").is_empty());
    }

    /// Scenario S1 from the design doc: chunk_size=10, chunk_overlap=2,
    /// text "ABCDEFGHIJKLMNOPQR" (18 bytes) -> three chunks at indices 0,1,2
    /// of lengths 10, 10, 6.
    #[test]
    fn s1_small_round_trip_fixture() {
        let cfg = ChunkerConfig {
            chunk_size: 10,
            chunk_overlap: 2,
        };
        let chunker = Chunker::new(cfg).unwrap();
        let chunks = chunker.chunk(b"ABCDEFGHIJKLMNOPQR");

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text, b"ABCDEFGHIJ");
        assert_eq!(chunks[1].index, 1);
        assert_eq!(chunks[1].text, b"IJKLMNOPQR");
        assert_eq!(chunks[2].index, 2);
        assert_eq!(chunks[2].text, b"QR");
    }

    /// Scenario S2: text shorter than chunk_size produces exactly one chunk.
    #[test]
    fn s2_single_chunk_when_shorter_than_window() {
        let cfg = ChunkerConfig {
            chunk_size: 500,
            chunk_overlap: 50,
        };
        let chunker = Chunker::new(cfg).unwrap();
        let text = vec![b'x'; 300];
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text.len(), 300);
    }

    #[test]
    fn final_chunk_is_not_padded() {
        let cfg = ChunkerConfig {
            chunk_size: 4,
            chunk_overlap: 1,
        };
        let chunker = Chunker::new(cfg).unwrap();
        let chunks = chunker.chunk(b"abcdefgh"); // 8 bytes, stride 3
        let last = chunks.last().unwrap();
        assert!(last.text.len() <= 4);
    }

    #[test]
    fn determinism() {
        let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
        let text = b"the quick brown fox jumps over the lazy dog".repeat(20);
        assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
    }

    #[test]
    fn frame_indices_are_contiguous_from_zero() {
        let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
        let text = vec![b'z'; 2345];
        let chunks = chunker.chunk(&text);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.index, i as u64);
        }
    }

    proptest::proptest! {
        #[test]
        fn reassembly_recovers_source(
            text in proptest::collection::vec(proptest::num::u8::ANY, 0..2000),
            size in 5usize..60,
            overlap in 0usize..4,
        ) {
            let overlap = overlap.min(size - 1);
            let cfg = ChunkerConfig { chunk_size: size, chunk_overlap: overlap };
            let chunks = chunk_with(&text, &cfg);

            let mut reassembled = Vec::new();
            for (i, c) in chunks.iter().enumerate() {
                if i == chunks.len() - 1 {
                    reassembled.extend_from_slice(&c.text);
                } else {
                    let keep = c.text.len().saturating_sub(overlap);
                    reassembled.extend_from_slice(&c.text[..keep]);
                }
            }
            proptest::prop_assert_eq!(reassembled, text);
        }

        #[test]
        fn frame_index_bijection(
            text in proptest::collection::vec(proptest::num::u8::ANY, 0..2000),
            size in 5usize..60,
            overlap in 0usize..4,
        ) {
            let overlap = overlap.min(size - 1);
            let cfg = ChunkerConfig { chunk_size: size, chunk_overlap: overlap };
            let chunks = chunk_with(&text, &cfg);
            for (i, c) in chunks.iter().enumerate() {
                proptest::prop_assert_eq!(c.index, i as u64);
            }
        }
    }
}
