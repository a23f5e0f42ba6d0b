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
//! The one concrete [`Embedder`] this binary ships with.
//!
//! The wire format of a third-party embedding provider is explicitly named as
//! an external collaborator the core does not specify. This is this CLI's own
//! minimal choice — a JSON-over-HTTP call — not a contract anything downstream
//! depends on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use textvault_retriever::Embedder;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// `POST {url}` with `{"input": text}`, expecting `{"embedding": [f32, ...]}` back.
pub struct HttpEmbedder {
    client: reqwest::Client,
    url: String,
    dimension: usize,
}

impl HttpEmbedder {
    pub fn new(url: impl Into<String>, dimension: usize, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            dimension,
        })
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let response = self
            .client
            .post(&self.url)
            .json(&EmbedRequest { input: text })
            .send()
            .await?
            .error_for_status()?;

        let body: EmbedResponse = response.json().await?;
        if body.embedding.len() != self.dimension {
            anyhow::bail!(
                "embedder at {} returned {} dimensions, configured for {}",
                self.url,
                body.embedding.len(),
                self.dimension
            );
        }
        Ok(body.embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
