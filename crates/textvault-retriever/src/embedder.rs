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
//! The `Embedder` contract: the one external collaborator this crate depends
//! on but never implements a concrete network client for — the distilled
//! spec calls out "the concrete HTTP wire format of third-party embedding
//! providers" as out of scope, so only the trait and a fixed dimension live
//! here. Mirrors how `textvault_index::VectorDatabase` is depended on only
//! through its trait object.

use async_trait::async_trait;

/// Produces a fixed-length embedding vector for a piece of text.
///
/// Implementations are expected to be cheap to clone (wrap a client in an
/// `Arc` if needed) since the retriever fans this out across chunks.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed `text`, returning a vector of length [`Embedder::dimension`].
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;

    /// The fixed length of every vector this embedder produces. Used by the
    /// index to validate embedding uniformity (invariant #2 of the data model).
    fn dimension(&self) -> usize;
}
