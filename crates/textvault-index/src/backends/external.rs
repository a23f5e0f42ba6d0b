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
//! External-store backend: proxies the `VectorDatabase` contract to a remote
//! relational/vector database over HTTP
//!
//! The concrete wire format of a third-party vector store is explicitly out
//! of scope for the core (it's a collaborator, not something this
//! specification pins down). This backend therefore exposes a thin JSON
//! proxy shape — four endpoints mirroring the trait one-for-one — as a
//! reference implementation a real deployment is expected to replace with
//! whatever its chosen store actually speaks.

use crate::backend::VectorDatabase;
use crate::entry::IndexEntry;
use crate::error::IndexResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// HTTP-backed `VectorDatabase` proxy
#[derive(Debug)]
pub struct ExternalBackend {
    base_url: String,
    client: reqwest::Client,
}

impl ExternalBackend {
    /// Construct a proxy against `base_url`, using a default `reqwest`
    /// client with `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a [f32],
    k: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    entries: Vec<IndexEntry>,
}

#[derive(Serialize)]
struct UpsertRequest {
    entries: Vec<IndexEntry>,
}

#[derive(Deserialize)]
struct CountResponse {
    count: usize,
}

#[async_trait]
impl VectorDatabase for ExternalBackend {
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    async fn upsert(&self, entries: Vec<IndexEntry>) -> IndexResult<()> {
        self.client
            .post(self.url("upsert"))
            .json(&UpsertRequest { entries })
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &[f32], k: usize) -> IndexResult<Vec<IndexEntry>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let resp: SearchResponse = self
            .client
            .post(self.url("search"))
            .json(&SearchRequest { query, k })
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!(e))?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(resp.entries)
    }

    async fn delete(&self, document_id: &str) -> IndexResult<()> {
        self.client
            .delete(self.url(&format!("documents/{document_id}")))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    }

    async fn clear(&self) -> IndexResult<()> {
        self.client
            .post(self.url("clear"))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    }

    async fn len(&self) -> IndexResult<usize> {
        let resp: CountResponse = self
            .client
            .get(self.url("count"))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!(e))?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(resp.count)
    }
}
