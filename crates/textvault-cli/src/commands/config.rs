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
//! Validate a configuration file without running any other command.

use crate::output;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration-related subcommands
#[derive(Parser, Debug)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Load and validate a configuration file
    Validate {
        /// Path to a TOML or YAML configuration file
        path: PathBuf,
    },
}

impl ConfigCmd {
    pub async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Validate { path } => {
                let config = textvault_config::load(path).await?;
                output::success(&format!("{} is valid", path.display()));
                output::detail("chunk_size", &config.chunk_size.to_string());
                output::detail("chunk_overlap", &config.chunk_overlap.to_string());
                output::detail("video_fps", &config.video_fps.to_string());
                output::detail("max_cache_size", &config.max_cache_size.to_string());
                Ok(())
            }
        }
    }
}
