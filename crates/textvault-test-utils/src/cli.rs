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
//! CLI command helpers for `textvault-cli` integration tests.

use assert_cmd::Command;
use std::path::Path;

/// Build a `Command` for the `textvault` binary under test.
pub fn textvault() -> Command {
    Command::cargo_bin("textvault").expect("textvault binary not found")
}

/// Fluent wrapper over [`textvault`] for common argument-building patterns.
pub struct TextVaultCommand {
    cmd: Command,
}

impl TextVaultCommand {
    /// Start building a new command invocation.
    pub fn new() -> Self {
        Self { cmd: textvault() }
    }

    /// Set the working directory.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Append one argument.
    pub fn arg(mut self, arg: &str) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Consume the builder, returning the underlying `assert_cmd::Command`.
    pub fn into_inner(self) -> Command {
        self.cmd
    }
}

impl Default for TextVaultCommand {
    fn default() -> Self {
        Self::new()
    }
}
