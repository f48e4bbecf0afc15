/*
 * inputs.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Loading of the page context and asset catalog files.
//!
//! Files ending in `.json` are parsed as JSON, everything else as YAML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quarto_seo_meta::{MemoryAssetRepository, PageContext};

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Load a page context file.
pub fn load_page_context(path: &Path) -> Result<PageContext> {
    let source =
        fs::read_to_string(path).context(format!("Failed to read context file: {:?}", path))?;

    let context = if is_json(path) {
        let value: serde_json::Value = serde_json::from_str(&source)
            .context(format!("Failed to parse context file: {:?}", path))?;
        PageContext::from_json(value)
    } else {
        let value: serde_yaml::Value = serde_yaml::from_str(&source)
            .context(format!("Failed to parse context file: {:?}", path))?;
        PageContext::from_yaml(value)
    };

    Ok(context)
}

/// Load an asset catalog file (a list of `{ path, url }` entries).
pub fn load_assets(path: &Path) -> Result<MemoryAssetRepository> {
    let source =
        fs::read_to_string(path).context(format!("Failed to read asset catalog: {:?}", path))?;

    let assets = if is_json(path) {
        serde_json::from_str(&source)
            .context(format!("Failed to parse asset catalog: {:?}", path))?
    } else {
        serde_yaml::from_str(&source)
            .context(format!("Failed to parse asset catalog: {:?}", path))?
    };

    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarto_seo_meta::{Asset, AssetRepository};

    #[test]
    fn test_load_json_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        fs::write(&path, r#"{"title": "Home", "config": {"app": {"name": "Acme"}}}"#).unwrap();

        let ctx = load_page_context(&path).unwrap();
        assert_eq!(ctx.value("title"), "Home");
        assert_eq!(ctx.value("config.app.name"), "Acme");
    }

    #[test]
    fn test_load_yaml_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.yml");
        fs::write(&path, "title: About\n").unwrap();

        assert_eq!(load_page_context(&path).unwrap().value("title"), "About");
    }

    #[test]
    fn test_malformed_context_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_page_context(&path).unwrap_err();
        assert!(format!("{err}").contains("page.json"));
    }

    #[test]
    fn test_load_json_assets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        fs::write(&path, r#"[{"path": "/assets/a.jpg", "url": "/a.jpg"}]"#).unwrap();

        let assets = load_assets(&path).unwrap();
        assert_eq!(
            assets.all().unwrap(),
            vec![Asset::new("/assets/a.jpg", "/a.jpg")]
        );
    }

    #[test]
    fn test_missing_asset_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_assets(&dir.path().join("missing.yaml")).is_err());
    }
}
