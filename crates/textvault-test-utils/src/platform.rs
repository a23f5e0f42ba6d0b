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
//! Temp-directory scaffolding for tests that need a scratch vault on disk.

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding a vault's on-disk artifacts (MP4s, an
/// optional file-backed index), removed on drop.
pub struct TempVaultDir {
    dir: TempDir,
}

impl TempVaultDir {
    /// Create a fresh scratch directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp vault dir"),
        }
    }

    /// Root path of the scratch directory.
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Path for a document's MP4 artifact, named `<document_id>.mp4`.
    pub fn video_path(&self, document_id: &str) -> PathBuf {
        self.dir.path().join(format!("{document_id}.mp4"))
    }

    /// Path for a file-backed index document.
    pub fn index_path(&self) -> PathBuf {
        self.dir.path().join("index.json")
    }
}

impl Default for TempVaultDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience constructor matching the free-function style the rest of the
/// crate's fixtures use.
pub fn temp_vault_dir() -> TempVaultDir {
    TempVaultDir::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_path_is_under_the_scratch_dir() {
        let dir = temp_vault_dir();
        let video = dir.video_path("doc-1");
        assert!(video.starts_with(dir.path()));
        assert_eq!(video.file_name().unwrap(), "doc-1.mp4");
    }
}
