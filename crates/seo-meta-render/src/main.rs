/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Renders a page's title and social meta tags from context, settings and
 * asset catalog files.
 */

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quarto_seo_meta::{
    ContextExpander, ExpressionExpander, MemoryAssetRepository, MemorySettingsStore,
    MetaResolver, NullExpander, SettingsStore, SiteConfig, YamlSettingsStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod inputs;

#[derive(Parser, Debug)]
#[command(name = "seo-meta-render")]
#[command(about = "Render title, description, Open Graph and Twitter meta tags for a page")]
struct Args {
    /// Page context file (YAML, or JSON with a .json extension)
    #[arg(short = 'c', long, value_name = "FILE")]
    context: PathBuf,

    /// YAML file holding the `settings` collection with the meta defaults
    #[arg(short = 's', long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Asset catalog file: a list of `{ path, url }` entries
    #[arg(short = 'a', long, value_name = "FILE")]
    assets: Option<PathBuf>,

    /// Site name (defaults to `config.app.name` from the context)
    #[arg(long)]
    app_name: Option<String>,

    /// Site URL used for `twitter:domain` (defaults to `config.app.url`)
    #[arg(long)]
    app_url: Option<String>,

    /// Only emit the `<title>` element
    #[arg(long, conflicts_with = "json")]
    title_only: bool,

    /// Print the resolved values as JSON instead of HTML
    #[arg(long)]
    json: bool,

    /// Do not expand `{{ variable }}` expressions in descriptions
    #[arg(long)]
    no_expand: bool,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "seo_meta_render=info,quarto_seo_meta=warn",
        1 => "seo_meta_render=debug,quarto_seo_meta=debug",
        _ => "seo_meta_render=trace,quarto_seo_meta=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let page = inputs::load_page_context(&args.context)?;

    let settings: Box<dyn SettingsStore> = match &args.settings {
        Some(path) => Box::new(
            YamlSettingsStore::from_path(path)
                .context(format!("Failed to load settings: {:?}", path))?,
        ),
        None => Box::new(MemorySettingsStore::new()),
    };

    let assets = match &args.assets {
        Some(path) => inputs::load_assets(path)?,
        None => MemoryAssetRepository::new(),
    };
    tracing::debug!(assets = assets.len(), "Loaded asset catalog");

    let site = SiteConfig::new(
        args.app_name.clone().unwrap_or_default(),
        args.app_url.clone().unwrap_or_default(),
    )
    .or(SiteConfig::from_context(&page));

    let context_expander = ContextExpander::new(&page);
    let expander: &dyn ExpressionExpander = if args.no_expand {
        &NullExpander
    } else {
        &context_expander
    };

    let resolver = MetaResolver::from_store(&page, settings.as_ref(), site, expander, &assets)
        .context("Failed to read meta defaults")?;

    let rendered = if args.json {
        let meta = resolver.resolve()?;
        serde_json::to_string_pretty(&meta).context("Failed to serialize resolved meta")?
    } else if args.title_only {
        resolver.render_title()
    } else {
        resolver.render_meta_block()?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .context(format!("Failed to write output file: {:?}", path))?;
            tracing::info!(output = %path.display(), "Wrote meta tags");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
