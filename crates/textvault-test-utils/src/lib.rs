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
//! Shared test fixtures for TextVault crates: mock embedders, temp-dir
//! scaffolding, fixture texts, and custom assertions.

pub mod assertions;
pub mod cli;
pub mod embedder;
pub mod fixtures;
pub mod platform;

pub use assertions::{assert_close, assert_descending_similarity, assert_similarities_bounded};
pub use cli::{textvault, TextVaultCommand};
pub use embedder::{identity_embedder, MockEmbedder};
pub use fixtures::{multibyte_text, text_of_len, S1_TEXT};
pub use platform::{temp_vault_dir, TempVaultDir};
