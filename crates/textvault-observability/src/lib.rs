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
//! Structured logging and tracing initialization for TextVault.
//!
//! # Features
//!
//! - **Multiple output formats**: pretty, compact, and JSON
//! - **Environment-based filtering**: dynamic log level control via `RUST_LOG`
//! - **`verbose` bridge**: [`config::LogConfig::from_verbose`] maps the vault
//!   config's single `verbose` boolean onto a level floor, so the CLI and
//!   other crates never parse `RUST_LOG` themselves.
//!
//! # Example
//!
//! ```ignore
//! use textvault_observability::{init_tracing, LogFormat};
//!
//! init_tracing(LogFormat::Pretty, None)?;
//! tracing::info!("vault opened");
//! ```

pub mod config;
pub mod initialization;
pub mod macros;

pub use config::{LogConfig, LogError, LogFormat, LogOutput};
pub use initialization::{init_tracing, init_tracing_with_config};

/// Tracing re-exports for convenience, so downstream crates depend on this
/// crate alone rather than pulling `tracing` directly for macro access.
pub use tracing::{debug, error, info, span, trace, warn, Level};
