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
//! Encode a text file into a QR-bearing MP4 and index it.

use crate::context::{read_text, VaultArgs};
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Add a document: chunk, rasterize, embed, mux, and index it
#[derive(Parser, Debug)]
pub struct AddCmd {
    /// Path to the source text file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Opaque identifier for this document
    #[arg(long = "doc-id")]
    pub doc_id: String,

    /// Destination path for the muxed MP4 artifact
    #[arg(long)]
    pub video: PathBuf,

    #[command(flatten)]
    pub vault: VaultArgs,
}

impl AddCmd {
    pub async fn execute(&self) -> Result<()> {
        let text = read_text(&self.path).await?;
        output::info(&format!("Encoding '{}' ({} bytes)...", self.doc_id, text.len()));

        let retriever = self.vault.build_retriever().await?;
        retriever.add_document(&self.doc_id, &text, &self.video).await?;

        output::success(&format!(
            "Added document '{}' ({} bytes) to {}",
            self.doc_id,
            text.len(),
            self.video.display()
        ));
        Ok(())
    }
}
