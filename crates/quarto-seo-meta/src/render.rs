/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML output for resolved meta values.
//!
//! Values in [`ResolvedMeta`] are plain text. Escaping happens here, and the
//! description-like values have their markup stripped before they are put
//! into a `content` attribute.

use std::io::{self, Write};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resolver::ResolvedMeta;

/// `og:type` value.
pub const OG_TYPE: &str = "website";

/// `twitter:card` value.
pub const TWITTER_CARD: &str = "summary_large_image";

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("tag pattern is valid"));

/// Remove HTML tags and comments, keeping the text between them.
pub fn strip_tags(s: &str) -> String {
    TAG_RE.replace_all(s, "").into_owned()
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// `<title>` element for an unescaped title.
pub fn title_tag(title: &str) -> String {
    format!("<title>{}</title>", escape_html(title))
}

/// Render only the `<title>` element.
pub fn render_title(meta: &ResolvedMeta) -> String {
    title_tag(&meta.title)
}

/// Render the title, description, Open Graph and Twitter tags.
pub fn render_meta_block(meta: &ResolvedMeta) -> String {
    let description = escape_html(&strip_tags(&meta.description));
    let social_description = escape_html(&strip_tags(&meta.social_description));
    let social_title = escape_html(&meta.social_title);
    let url = escape_html(&meta.canonical_url);
    let image = escape_html(meta.social_image_url.as_deref().unwrap_or_default());
    let domain = escape_html(&meta.site_url);

    let mut out = render_title(meta);
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{description}\" />"
    ));

    out.push_str("<!-- Facebook Meta Tags -->");
    out.push_str(&format!("<meta property=\"og:url\" content=\"{url}\">"));
    out.push_str(&format!("<meta property=\"og:type\" content=\"{OG_TYPE}\">"));
    out.push_str(&format!(
        "<meta property=\"og:title\" content=\"{social_title}\">"
    ));
    out.push_str(&format!(
        "<meta property=\"og:description\" content=\"{social_description}\">"
    ));
    out.push_str(&format!("<meta property=\"og:image\" content=\"{image}\">"));

    out.push_str("<!-- Twitter Meta Tags -->");
    out.push_str(&format!(
        "<meta name=\"twitter:card\" content=\"{TWITTER_CARD}\">"
    ));
    out.push_str(&format!(
        "<meta property=\"twitter:domain\" content=\"{domain}\">"
    ));
    out.push_str(&format!("<meta property=\"twitter:url\" content=\"{url}\">"));
    out.push_str(&format!(
        "<meta name=\"twitter:title\" content=\"{social_title}\">"
    ));
    out.push_str(&format!(
        "<meta name=\"twitter:description\" content=\"{social_description}\">"
    ));
    out.push_str(&format!(
        "<meta property=\"twitter:image\" content=\"{image}\">"
    ));

    out
}

/// Write the `<title>` element to `buf`.
pub fn write_title<W: Write>(meta: &ResolvedMeta, buf: &mut W) -> io::Result<()> {
    buf.write_all(render_title(meta).as_bytes())
}

/// Write the full meta block to `buf`.
pub fn write_meta_block<W: Write>(meta: &ResolvedMeta, buf: &mut W) -> io::Result<()> {
    buf.write_all(render_meta_block(meta).as_bytes())
}
