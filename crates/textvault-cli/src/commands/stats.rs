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
//! Report chunking and artifact statistics for a document without touching
//! the index (re-chunks the source text and probes the MP4 directly).

use crate::context::{read_text, VaultArgs};
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Show chunk/frame/compression statistics for a document
#[derive(Parser, Debug)]
pub struct StatsCmd {
    /// Path to the document's source text file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Path to the document's muxed MP4 artifact
    #[arg(long)]
    pub video: PathBuf,

    #[command(flatten)]
    pub vault: VaultArgs,
}

impl StatsCmd {
    pub async fn execute(&self) -> Result<()> {
        let text = read_text(&self.path).await?;
        let retriever = self.vault.build_retriever().await?;
        let stats = retriever.stats(&text, &self.video)?;

        output::header(&format!("Stats for {}", self.video.display()));
        output::detail("total_chunks", &stats.total_chunks.to_string());
        output::detail("total_frames", &stats.total_frames.to_string());
        output::detail("video_size_bytes", &stats.video_size_bytes.to_string());
        output::detail("original_size_bytes", &stats.original_size_bytes.to_string());
        output::detail("compression_ratio", &format!("{:.4}", stats.compression_ratio));
        output::detail("duration_seconds", &format!("{:.2}", stats.duration_seconds));

        Ok(())
    }
}
