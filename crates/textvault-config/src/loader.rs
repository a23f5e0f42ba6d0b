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
//! Loading `VaultConfig` from TOML or YAML files

use crate::error::{ConfigError, ConfigResult};
use crate::schema::VaultConfig;
use std::path::Path;
use tracing::{debug, instrument};

/// Load and validate a [`VaultConfig`] from `path`. Format (TOML or YAML) is
/// inferred from the file extension.
#[instrument]
pub async fn load(path: &Path) -> ConfigResult<VaultConfig> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            format: "toml",
            source: e.into(),
        })?,
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                format: "yaml",
                source: e.into(),
            })?
        }
        _ => {
            return Err(ConfigError::UnknownFormat(path.display().to_string()));
        }
    };

    validate_and_return(config)
}

/// Parse a [`VaultConfig`] from an in-memory TOML document (used by callers
/// that already have the bytes, e.g. embedded defaults).
pub fn from_toml_str(raw: &str) -> ConfigResult<VaultConfig> {
    let config = toml::from_str(raw).map_err(|e| ConfigError::Parse {
        path: "<inline>".to_string(),
        format: "toml",
        source: e.into(),
    })?;
    validate_and_return(config)
}

fn validate_and_return(config: VaultConfig) -> ConfigResult<VaultConfig> {
    config.validate()?;
    debug!(?config, "loaded and validated configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.toml");
        tokio::fs::write(&path, "chunk_size = 200\nchunk_overlap = 20\n")
            .await
            .unwrap();

        let cfg = load(&path).await.unwrap();
        assert_eq!(cfg.chunk_size, 200);
        assert_eq!(cfg.chunk_overlap, 20);
    }

    #[tokio::test]
    async fn loads_valid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.yaml");
        tokio::fs::write(&path, "chunk_size: 300\nchunk_overlap: 30\n")
            .await
            .unwrap();

        let cfg = load(&path).await.unwrap();
        assert_eq!(cfg.chunk_size, 300);
    }

    #[tokio::test]
    async fn rejects_invalid_config_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.toml");
        tokio::fs::write(&path, "chunk_size = 10\nchunk_overlap = 10\n")
            .await
            .unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChunking { .. }));
    }

    #[tokio::test]
    async fn unknown_extension_is_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.ini");
        tokio::fs::write(&path, "chunk_size = 10\n").await.unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat(_)));
    }

    #[test]
    fn inline_toml_parses() {
        let cfg = from_toml_str("max_cache_size = 100\n").unwrap();
        assert_eq!(cfg.max_cache_size, 100);
    }
}
