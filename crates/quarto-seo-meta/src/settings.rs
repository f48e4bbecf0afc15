/*
 * settings.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Site-wide default settings.
//!
//! This module provides the [`SettingsStore`] trait for reading named settings
//! from a backing collection, plus the [`SettingsDefaults`] snapshot the
//! resolver works from. The snapshot is read once per render so the store is
//! never consulted again while tags are being resolved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{MetaError, MetaResult};

/// Name of the collection the default settings live in.
pub const SETTINGS_COLLECTION: &str = "settings";

/// Trait for reading named settings.
///
/// Implementations are responsible for the storage backend. A missing setting
/// is `Ok(None)`; an `Err` means the backend itself failed and is propagated
/// to the host renderer.
pub trait SettingsStore {
    /// Name of the collection this store reads from.
    fn collection(&self) -> &str {
        SETTINGS_COLLECTION
    }

    /// Read a setting by key.
    fn get(&self, key: &str) -> MetaResult<Option<String>>;
}

/// The fixed set of default settings the meta tags fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    MetaTitleDefault,
    MetaDescriptionDefault,
    SocialTitleDefault,
    SocialDescriptionDefault,
    SocialImageDefault,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::MetaTitleDefault,
        SettingKey::MetaDescriptionDefault,
        SettingKey::SocialTitleDefault,
        SettingKey::SocialDescriptionDefault,
        SettingKey::SocialImageDefault,
    ];

    /// Key under which the setting is stored.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::MetaTitleDefault => "meta_title_default",
            SettingKey::MetaDescriptionDefault => "meta_description_default",
            SettingKey::SocialTitleDefault => "social_title_default",
            SettingKey::SocialDescriptionDefault => "social_description_default",
            SettingKey::SocialImageDefault => "social_image_default",
        }
    }
}

/// Snapshot of the default settings for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDefaults {
    values: HashMap<SettingKey, String>,
}

impl SettingsDefaults {
    /// Create an empty snapshot (every default unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every known key from the store.
    pub fn load(store: &dyn SettingsStore) -> MetaResult<Self> {
        let mut values = HashMap::new();
        for key in SettingKey::ALL {
            if let Some(value) = store.get(key.as_str())? {
                values.insert(key, value);
            }
        }
        tracing::debug!(
            collection = store.collection(),
            loaded = values.len(),
            "Loaded meta defaults"
        );
        Ok(Self { values })
    }

    /// Builder-style setter, mostly for tests and embedding hosts.
    pub fn with(mut self, key: SettingKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// The default for `key` if it is set to a non-empty string.
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values
            .get(&key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Settings store backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting to the store.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Create a store with the given settings.
    pub fn with_values(
        values: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        let mut store = Self::new();
        for (key, value) in values {
            store.add(key, value);
        }
        store
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> MetaResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

/// Settings store backed by a YAML mapping file.
///
/// The file is read eagerly by [`YamlSettingsStore::from_path`]. Scalar values
/// are kept in their string form; nested or null values read as unset.
#[derive(Debug, Clone)]
pub struct YamlSettingsStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl YamlSettingsStore {
    /// Load a settings collection from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> MetaResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        Self::from_str_at(&source, path)
    }

    /// Parse settings from YAML source. `path` is used for error reporting.
    pub fn from_str_at(source: &str, path: &Path) -> MetaResult<Self> {
        if source.trim().is_empty() {
            return Ok(Self {
                path: path.to_path_buf(),
                values: HashMap::new(),
            });
        }

        let parsed: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| MetaError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mapping = match parsed {
            serde_yaml::Value::Mapping(m) => m,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            _ => {
                return Err(MetaError::Parse {
                    path: path.to_path_buf(),
                    message: "expected a mapping of setting names to values".to_string(),
                });
            }
        };

        let values = mapping
            .into_iter()
            .filter_map(|(k, v)| Some((scalar(k)?, scalar(v)?)))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Path the settings were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for YamlSettingsStore {
    fn get(&self, key: &str) -> MetaResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

fn scalar(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
