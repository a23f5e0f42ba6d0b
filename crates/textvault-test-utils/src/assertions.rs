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
//! Custom numeric and search-result assertions for TextVault tests.

use textvault_retriever::SearchResult;

/// Assert that two floats are within `eps` of each other.
pub fn assert_close(actual: f32, expected: f32, eps: f32) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {expected} +/- {eps}, got {actual}"
    );
}

/// Assert that `results` is sorted by descending similarity (ties permitted).
pub fn assert_descending_similarity(results: &[SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].similarity >= pair[1].similarity,
            "results not sorted by descending similarity: {} then {}",
            pair[0].similarity,
            pair[1].similarity
        );
    }
}

/// Assert that every similarity in `results` lies in `[-1, 1]` (§8 property 5).
pub fn assert_similarities_bounded(results: &[SearchResult]) {
    for r in results {
        assert!(
            (-1.0..=1.0).contains(&r.similarity),
            "similarity {} out of bounds for frame {}",
            r.similarity,
            r.frame_number
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_within_epsilon_passes() {
        assert_close(1.0001, 1.0, 0.001);
    }

    #[test]
    #[should_panic]
    fn close_outside_epsilon_panics() {
        assert_close(1.1, 1.0, 0.001);
    }
}
