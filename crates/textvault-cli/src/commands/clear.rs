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
//! Remove every entry from the index.

use crate::context::IndexArgs;
use crate::output;
use anyhow::Result;
use clap::Parser;
use textvault_index::VectorDatabase;

/// Remove every entry from the index
#[derive(Parser, Debug)]
pub struct ClearCmd {
    #[command(flatten)]
    pub index: IndexArgs,
}

impl ClearCmd {
    pub async fn execute(&self) -> Result<()> {
        let backend = self.index.open_index().await?;
        backend.clear().await?;
        output::success("Cleared the index");
        Ok(())
    }
}
