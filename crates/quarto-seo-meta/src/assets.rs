/*
 * assets.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Asset catalog lookup.
//!
//! The social image default is stored as an asset path. Turning it into a URL
//! means finding the asset in the host's catalog, which is reached through the
//! [`AssetRepository`] trait.

use serde::{Deserialize, Serialize};

use crate::error::MetaResult;

/// An entry in the asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    path: String,
    url: String,
}

impl Asset {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }

    /// Path of the asset inside its container (e.g. `/assets/share.jpg`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Public URL the asset resolves to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Trait for listing the host's assets.
pub trait AssetRepository {
    /// Every asset in the catalog, in catalog order.
    fn all(&self) -> MetaResult<Vec<Asset>>;

    /// First asset whose path equals `path` exactly.
    ///
    /// The provided implementation scans [`all`](Self::all); catalogs that
    /// keep an index by path should override it.
    fn find_by_path(&self, path: &str) -> MetaResult<Option<Asset>> {
        Ok(self.all()?.into_iter().find(|asset| asset.path() == path))
    }
}

/// Repository that always reports an empty catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAssetRepository;

impl AssetRepository for NullAssetRepository {
    fn all(&self) -> MetaResult<Vec<Asset>> {
        Ok(Vec::new())
    }
}

/// Repository backed by an in-memory list.
///
/// Deserializes from a plain list of `{ path, url }` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryAssetRepository {
    assets: Vec<Asset>,
}

impl MemoryAssetRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an asset to the catalog.
    pub fn add(&mut self, asset: Asset) -> &mut Self {
        self.assets.push(asset);
        self
    }

    /// Create a repository with the given assets.
    pub fn with_assets(assets: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            assets: assets.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetRepository for MemoryAssetRepository {
    fn all(&self) -> MetaResult<Vec<Asset>> {
        Ok(self.assets.clone())
    }

    fn find_by_path(&self, path: &str) -> MetaResult<Option<Asset>> {
        Ok(self.assets.iter().find(|asset| asset.path() == path).cloned())
    }
}
