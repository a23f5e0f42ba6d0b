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
//! Configuration schema, loading, and validation
//!
//! Environment-variable loading and CLI flag parsing themselves are the
//! out-of-scope "external collaborators" the design doc names — this crate
//! only owns the typed schema, file-based loading, and validation that the
//! CLI wires those collaborators into.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{from_toml_str, load};
pub use schema::{EclLevel, VaultConfig, VideoResolution};
