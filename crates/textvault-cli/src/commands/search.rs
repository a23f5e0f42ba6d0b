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
//! Query one or more vaults by semantic similarity.

use crate::context::VaultArgs;
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Search for chunks similar to a query, across one or more videos
#[derive(Parser, Debug)]
pub struct SearchCmd {
    /// Query text
    pub query: String,

    /// Video to search; repeat for multiple videos (`search_multiple` semantics)
    #[arg(long = "video", required = true)]
    pub videos: Vec<PathBuf>,

    /// Number of results to return per video
    #[arg(short = 'k', long, default_value_t = 5)]
    pub k: usize,

    #[command(flatten)]
    pub vault: VaultArgs,
}

impl SearchCmd {
    pub async fn execute(&self) -> Result<()> {
        let retriever = self.vault.build_retriever().await?;

        let results = if self.videos.len() == 1 {
            retriever.search(&self.query, &self.videos[0], self.k).await?
        } else {
            retriever.search_multiple(&self.query, &self.videos, self.k).await?
        };

        if results.is_empty() {
            output::info("No results");
            return Ok(());
        }

        for (rank, result) in results.iter().enumerate() {
            output::header(&format!(
                "#{} — {} (frame {}, similarity {:.4})",
                rank + 1,
                result.document_id,
                result.frame_number,
                result.similarity
            ));
            println!("{}", String::from_utf8_lossy(&result.chunk_text));
            println!();
        }

        Ok(())
    }
}
