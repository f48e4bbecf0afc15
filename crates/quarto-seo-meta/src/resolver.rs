/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Fallback resolution of meta tag values.
//!
//! Every field is resolved through the same chain:
//!
//! 1. the page's own override (e.g. `alt_seo_meta_title`)
//! 2. the site-wide default from the settings snapshot
//! 3. a computed fallback (`"{page title} | {site name}"` for titles,
//!    empty for descriptions, nothing for the social image)
//!
//! Values taken from the page or the settings get `{title}` and
//! `{site_name}` placeholder substitution. Description-like values are also
//! run through the [`ExpressionExpander`].

use serde::Serialize;

use crate::assets::AssetRepository;
use crate::context::PageContext;
use crate::error::MetaResult;
use crate::expander::ExpressionExpander;
use crate::render;
use crate::settings::{SettingKey, SettingsDefaults, SettingsStore};
use crate::site::SiteConfig;

/// Page context keys the resolver reads.
pub mod keys {
    pub const META_TITLE: &str = "alt_seo_meta_title";
    pub const META_DESCRIPTION: &str = "alt_seo_meta_description";
    pub const SOCIAL_TITLE: &str = "alt_seo_social_title";
    pub const SOCIAL_DESCRIPTION: &str = "alt_seo_social_description";
    pub const SOCIAL_IMAGE: &str = "alt_seo_social_image";
    pub const PAGE_TITLE: &str = "title";
    pub const CURRENT_URL: &str = "current_full_url";
}

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Placeholder replaced by the site name.
pub const SITE_NAME_PLACEHOLDER: &str = "{site_name}";

/// Placeholder in the social description replaced by the resolved description.
pub const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Page,
    Settings,
}

/// All meta values for one page, unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    pub social_title: String,
    pub social_description: String,
    pub social_image_url: Option<String>,
    pub canonical_url: String,
    pub site_url: String,
}

/// Resolves meta values for a single page render.
pub struct MetaResolver<'a> {
    context: &'a PageContext,
    defaults: SettingsDefaults,
    site: SiteConfig,
    expander: &'a dyn ExpressionExpander,
    assets: &'a dyn AssetRepository,
}

impl<'a> MetaResolver<'a> {
    pub fn new(
        context: &'a PageContext,
        defaults: SettingsDefaults,
        site: SiteConfig,
        expander: &'a dyn ExpressionExpander,
        assets: &'a dyn AssetRepository,
    ) -> Self {
        Self {
            context,
            defaults,
            site,
            expander,
            assets,
        }
    }

    /// Create a resolver, reading the defaults from `store` once.
    pub fn from_store(
        context: &'a PageContext,
        store: &dyn SettingsStore,
        site: SiteConfig,
        expander: &'a dyn ExpressionExpander,
        assets: &'a dyn AssetRepository,
    ) -> MetaResult<Self> {
        let defaults = SettingsDefaults::load(store)?;
        Ok(Self::new(context, defaults, site, expander, assets))
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Replace `{title}` then `{site_name}`.
    ///
    /// Each token is replaced in a single pass; text inserted for a token is
    /// not scanned again for that token.
    pub fn replace_vars(&self, input: &str) -> String {
        let page_title = self.context.value(keys::PAGE_TITLE);
        input
            .replace(TITLE_PLACEHOLDER, &page_title)
            .replace(SITE_NAME_PLACEHOLDER, &self.site.app_name)
    }

    /// First non-empty value among the page override and the settings default.
    fn layered(&self, context_key: &str, setting: SettingKey) -> Option<(Source, String)> {
        if let Some(value) = self.context.non_empty(context_key) {
            return Some((Source::Page, value));
        }
        self.defaults
            .get(setting)
            .map(|value| (Source::Settings, value.to_string()))
    }

    fn fallback_title(&self) -> String {
        format!(
            "{} | {}",
            self.context.value(keys::PAGE_TITLE),
            self.site.app_name
        )
    }

    fn resolve_title_like(&self, context_key: &str, setting: SettingKey) -> String {
        match self.layered(context_key, setting) {
            Some((source, value)) => {
                tracing::debug!(field = context_key, ?source, "Resolved title");
                self.replace_vars(&value)
            }
            None => {
                tracing::debug!(field = context_key, "Using computed title fallback");
                self.fallback_title()
            }
        }
    }

    fn resolve_description_like(&self, context_key: &str, setting: SettingKey) -> String {
        match self.layered(context_key, setting) {
            Some((source, value)) => {
                tracing::debug!(field = context_key, ?source, "Resolved description");
                self.expander.expand(&self.replace_vars(&value))
            }
            None => String::new(),
        }
    }

    /// The `<title>` value.
    pub fn title(&self) -> String {
        self.resolve_title_like(keys::META_TITLE, SettingKey::MetaTitleDefault)
    }

    /// The meta description, expanded but with markup intact.
    pub fn description(&self) -> String {
        self.resolve_description_like(keys::META_DESCRIPTION, SettingKey::MetaDescriptionDefault)
    }

    /// The Open Graph / Twitter title.
    pub fn social_title(&self) -> String {
        self.resolve_title_like(keys::SOCIAL_TITLE, SettingKey::SocialTitleDefault)
    }

    /// The Open Graph / Twitter description.
    ///
    /// A `{description}` token is replaced by [`description`](Self::description)
    /// as resolved, markup included.
    pub fn social_description(&self) -> String {
        let social = self.resolve_description_like(
            keys::SOCIAL_DESCRIPTION,
            SettingKey::SocialDescriptionDefault,
        );
        if social.contains(DESCRIPTION_PLACEHOLDER) {
            social.replace(DESCRIPTION_PLACEHOLDER, &self.description())
        } else {
            social
        }
    }

    /// The social image URL.
    ///
    /// A page value is used directly. A settings default is an asset path
    /// and resolves to the URL of the first asset with exactly that path, or
    /// `None` when the catalog has no such asset.
    pub fn social_image(&self) -> MetaResult<Option<String>> {
        match self.layered(keys::SOCIAL_IMAGE, SettingKey::SocialImageDefault) {
            Some((Source::Page, value)) => {
                Ok(Some(self.expander.expand(&self.replace_vars(&value))))
            }
            Some((Source::Settings, path)) => {
                let found = self.assets.find_by_path(&path)?;
                if found.is_none() {
                    tracing::warn!(path = %path, "Default social image not found in asset catalog");
                }
                Ok(found.map(|asset| asset.url().to_string()))
            }
            None => Ok(None),
        }
    }

    /// The page's full URL.
    pub fn canonical_url(&self) -> String {
        self.context.value(keys::CURRENT_URL)
    }

    /// Resolve every field.
    pub fn resolve(&self) -> MetaResult<ResolvedMeta> {
        Ok(ResolvedMeta {
            title: self.title(),
            description: self.description(),
            social_title: self.social_title(),
            social_description: self.social_description(),
            social_image_url: self.social_image()?,
            canonical_url: self.canonical_url(),
            site_url: self.site.app_url.clone(),
        })
    }

    /// `<title>…</title>` for this page.
    pub fn render_title(&self) -> String {
        render::title_tag(&self.title())
    }

    /// The full title, description, Open Graph and Twitter block.
    pub fn render_meta_block(&self) -> MetaResult<String> {
        Ok(render::render_meta_block(&self.resolve()?))
    }
}
