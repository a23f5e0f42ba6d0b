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
//! Command modules for the `textvault` CLI
pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod search;
pub mod stats;

pub use add::AddCmd;
pub use clear::ClearCmd;
pub use config::ConfigCmd;
pub use delete::DeleteCmd;
pub use search::SearchCmd;
pub use stats::StatsCmd;
