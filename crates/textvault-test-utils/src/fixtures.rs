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
//! Sample text fixtures for chunker/rasterizer/retriever tests.

/// The fixture text and configuration pinned by scenario S1 of the design
/// doc: `chunk_size=10, chunk_overlap=2`, 18 bytes, three chunks.
pub const S1_TEXT: &[u8] = b"ABCDEFGHIJKLMNOPQR";

/// Build a short ASCII text of exactly `len` bytes, repeating a fixed
/// pattern, for tests that need a specific size without caring about content.
pub fn text_of_len(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog ";
    pattern.iter().cycle().take(len).copied().collect()
}

/// A UTF-8 source text containing multi-byte codepoints, so tests covering
/// the chunker's byte-level (not codepoint-safe) boundary discipline have a
/// fixture where a chunk boundary can plausibly land mid-codepoint.
pub fn multibyte_text() -> Vec<u8> {
    "héllo wörld café — 日本語 テスト".as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_len_respects_length() {
        assert_eq!(text_of_len(100).len(), 100);
        assert_eq!(text_of_len(0).len(), 0);
    }

    #[test]
    fn multibyte_text_is_valid_utf8() {
        assert!(std::str::from_utf8(&multibyte_text()).is_ok());
    }
}
