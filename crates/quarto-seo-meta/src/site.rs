/*
 * site.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Site-level configuration passed explicitly to the resolver.

use serde::{Deserialize, Serialize};

use crate::context::PageContext;

/// Context key holding the application name.
pub const APP_NAME_KEY: &str = "config.app.name";

/// Context key holding the application URL.
pub const APP_URL_KEY: &str = "config.app.url";

/// Values that describe the site rather than the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, substituted for `{site_name}` and used in title fallbacks.
    pub app_name: String,

    /// Site URL, emitted as `twitter:domain`.
    pub app_url: String,
}

impl SiteConfig {
    pub fn new(app_name: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_url: app_url.into(),
        }
    }

    /// Read the site values from the page context (`config.app.name` and
    /// `config.app.url`).
    pub fn from_context(context: &PageContext) -> Self {
        Self {
            app_name: context.value(APP_NAME_KEY),
            app_url: context.value(APP_URL_KEY),
        }
    }

    /// Fill empty fields from `fallback`.
    pub fn or(self, fallback: SiteConfig) -> Self {
        Self {
            app_name: if self.app_name.is_empty() {
                fallback.app_name
            } else {
                self.app_name
            },
            app_url: if self.app_url.is_empty() {
                fallback.app_url
            } else {
                self.app_url
            },
        }
    }
}
