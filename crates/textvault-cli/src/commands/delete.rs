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
//! Remove every entry belonging to a document from the index.

use crate::context::IndexArgs;
use crate::output;
use anyhow::Result;
use clap::Parser;
use textvault_index::VectorDatabase;

/// Delete a document's entries from the index
#[derive(Parser, Debug)]
pub struct DeleteCmd {
    /// Document identifier to remove
    pub doc_id: String,

    #[command(flatten)]
    pub index: IndexArgs,
}

impl DeleteCmd {
    pub async fn execute(&self) -> Result<()> {
        let backend = self.index.open_index().await?;
        backend.delete(&self.doc_id).await?;
        output::success(&format!("Deleted document '{}'", self.doc_id));
        Ok(())
    }
}
