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
//! Shared setup for every subcommand: load configuration, open the index
//! backend, and build the HTTP embedder from the global flags.

use crate::embedder::HttpEmbedder;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use textvault_config::VaultConfig;
use textvault_index::{FileBackend, VectorDatabase};
use textvault_retriever::{Embedder, Retriever};

/// Common args every subcommand needs to build a [`Retriever`]. `clap`
/// flattens this into each subcommand's own arg struct.
#[derive(clap::Args, Debug, Clone)]
pub struct VaultArgs {
    /// Path to a TOML or YAML configuration file; defaults are used if omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the vector index's backing JSON document
    #[arg(long, default_value = "textvault-index.json")]
    pub index: PathBuf,

    /// URL of the embedding service this CLI calls for `embed(text)`
    #[arg(long, env = "TEXTVAULT_EMBEDDER_URL")]
    pub embedder_url: String,

    /// Dimension of the vectors the configured embedder returns
    #[arg(long, env = "TEXTVAULT_EMBEDDER_DIM", default_value_t = 384)]
    pub embedder_dim: usize,
}

impl VaultArgs {
    /// Load (or default) the [`VaultConfig`], open the file-backed index, and
    /// build the configured [`HttpEmbedder`] into one [`Retriever`].
    pub async fn build_retriever(&self) -> Result<Retriever> {
        let config = self.load_config().await?;

        let index: Arc<dyn VectorDatabase> = Arc::new(
            FileBackend::open(&self.index)
                .await
                .with_context(|| format!("failed to open index at {}", self.index.display()))?,
        );

        let embedder: Arc<dyn Embedder> = Arc::new(HttpEmbedder::new(
            &self.embedder_url,
            self.embedder_dim,
            Duration::from_secs(config.embedder_timeout_secs),
        )?);

        Ok(Retriever::new(index, embedder, config))
    }

    async fn load_config(&self) -> Result<VaultConfig> {
        match &self.config {
            Some(path) => textvault_config::load(path)
                .await
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => Ok(VaultConfig::default()),
        }
    }
}

/// Read a source text file into bytes, for commands that need the original
/// text alongside the index (`add`, `stats`).
pub async fn read_text(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read text file {}", path.display()))
}

/// Args for subcommands that only touch the index (`delete`, `clear`) and
/// have no need for an embedder.
#[derive(clap::Args, Debug, Clone)]
pub struct IndexArgs {
    /// Path to the vector index's backing JSON document
    #[arg(long, default_value = "textvault-index.json")]
    pub index: PathBuf,
}

impl IndexArgs {
    pub async fn open_index(&self) -> Result<FileBackend> {
        FileBackend::open(&self.index)
            .await
            .with_context(|| format!("failed to open index at {}", self.index.display()))
    }
}
