/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Title, description, Open Graph and Twitter Card meta tags for a page.
//!
//! Each value is taken from the first source that has one:
//!
//! - the page's own override (`alt_seo_meta_title`, `alt_seo_social_image`, ...)
//! - the site-wide default in the `settings` collection
//! - a computed fallback (`"{page title} | {site name}"` for titles)
//!
//! `{title}` and `{site_name}` placeholders are substituted in page and
//! settings values. Descriptions are additionally passed through an
//! [`ExpressionExpander`] and have their markup stripped when emitted.
//!
//! # Architecture
//!
//! The resolver performs no I/O. Settings, the asset catalog and expression
//! expansion are reached through the [`SettingsStore`], [`AssetRepository`]
//! and [`ExpressionExpander`] traits, so the host renderer decides where the
//! data comes from.
//!
//! # Example
//!
//! ```ignore
//! use quarto_seo_meta::{
//!     MemorySettingsStore, MetaResolver, NullAssetRepository, NullExpander, PageContext,
//!     SiteConfig,
//! };
//!
//! let page = PageContext::new().with("title", "Home");
//! let settings = MemorySettingsStore::with_values([("meta_title_default", "{title} - {site_name}")]);
//! let resolver = MetaResolver::from_store(
//!     &page,
//!     &settings,
//!     SiteConfig::new("Acme", "https://acme.test"),
//!     &NullExpander,
//!     &NullAssetRepository,
//! )?;
//!
//! assert_eq!(resolver.render_title(), "<title>Home - Acme</title>");
//! ```

pub mod assets;
pub mod context;
pub mod error;
pub mod expander;
pub mod render;
pub mod resolver;
pub mod settings;
pub mod site;

// Re-export main types at crate root
pub use assets::{Asset, AssetRepository, MemoryAssetRepository, NullAssetRepository};
pub use context::{ContextValue, PageContext};
pub use error::{MetaError, MetaResult};
pub use expander::{ContextExpander, ExpressionExpander, NullExpander};
pub use render::{render_meta_block, render_title, strip_tags};
pub use resolver::{MetaResolver, ResolvedMeta};
pub use settings::{
    MemorySettingsStore, SETTINGS_COLLECTION, SettingKey, SettingsDefaults, SettingsStore,
    YamlSettingsStore,
};
pub use site::SiteConfig;
