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
//! Convenience macros for structured logging.

/// Log a message with structured fields
#[macro_export]
macro_rules! log_info {
    ($msg:expr) => {
        tracing::info!($msg)
    };
    ($msg:expr => { $($key:expr => $value:expr),* $(,)? }) => {
        tracing::info!($msg, $($key = $value),*)
    };
}

/// Log a debug message with structured fields
#[macro_export]
macro_rules! log_debug {
    ($msg:expr) => {
        tracing::debug!($msg)
    };
    ($msg:expr => { $($key:expr => $value:expr),* $(,)? }) => {
        tracing::debug!($msg, $($key = $value),*)
    };
}

/// Log a warning message with structured fields
#[macro_export]
macro_rules! log_warn {
    ($msg:expr) => {
        tracing::warn!($msg)
    };
    ($msg:expr => { $($key:expr => $value:expr),* $(,)? }) => {
        tracing::warn!($msg, $($key = $value),*)
    };
}

/// Log an error message with structured fields
#[macro_export]
macro_rules! log_error {
    ($msg:expr) => {
        tracing::error!($msg)
    };
    ($msg:expr => { $($key:expr => $value:expr),* $(,)? }) => {
        tracing::error!($msg, $($key = $value),*)
    };
}

/// Create a span for performance tracking
#[macro_export]
macro_rules! trace_span {
    ($name:expr) => {
        tracing::span!(tracing::Level::DEBUG, $name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::span!(tracing::Level::DEBUG, $name, $($field)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_compile() {
        let _x = true;
    }
}
