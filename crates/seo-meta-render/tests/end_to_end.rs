/*
 * end_to_end.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for the seo-meta-render binary.
 */

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::Command;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> std::path::PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("tests/fixtures").join(name)
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_seo-meta-render"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run seo-meta-render")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "seo-meta-render failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_title_only() {
    let context = fixture_path("page.json");
    let settings = fixture_path("settings.yaml");
    let out = stdout_of(&[
        "--context",
        context.to_str().unwrap(),
        "--settings",
        settings.to_str().unwrap(),
        "--title-only",
    ]);
    assert_eq!(out, "<title>Blog - Acme</title>\n");
}

#[test]
fn test_full_block() {
    let context = fixture_path("page.json");
    let settings = fixture_path("settings.yaml");
    let assets = fixture_path("assets.yaml");
    let out = stdout_of(&[
        "--context",
        context.to_str().unwrap(),
        "--settings",
        settings.to_str().unwrap(),
        "--assets",
        assets.to_str().unwrap(),
    ]);

    let expected = concat!(
        "<title>Blog - Acme</title>",
        "<meta name=\"description\" content=\"Notes from the Acme team\" />",
        "<!-- Facebook Meta Tags -->",
        "<meta property=\"og:url\" content=\"https://acme.test/blog\">",
        "<meta property=\"og:type\" content=\"website\">",
        "<meta property=\"og:title\" content=\"Blog | Acme\">",
        "<meta property=\"og:description\" content=\"Notes from the Acme team\">",
        "<meta property=\"og:image\" content=\"https://acme.test/img/blog.png\">",
        "<!-- Twitter Meta Tags -->",
        "<meta name=\"twitter:card\" content=\"summary_large_image\">",
        "<meta property=\"twitter:domain\" content=\"https://acme.test\">",
        "<meta property=\"twitter:url\" content=\"https://acme.test/blog\">",
        "<meta name=\"twitter:title\" content=\"Blog | Acme\">",
        "<meta name=\"twitter:description\" content=\"Notes from the Acme team\">",
        "<meta property=\"twitter:image\" content=\"https://acme.test/img/blog.png\">",
        "\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn test_app_name_flag_overrides_context() {
    let context = fixture_path("page.json");
    let out = stdout_of(&[
        "--context",
        context.to_str().unwrap(),
        "--app-name",
        "Override",
        "--title-only",
    ]);
    assert_eq!(out, "<title>Blog | Override</title>\n");
}

#[test]
fn test_json_output() {
    let context = fixture_path("page.json");
    let out = stdout_of(&["--context", context.to_str().unwrap(), "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["title"], "Blog | Acme");
    assert_eq!(
        value["description"],
        "Notes from the <strong>Acme</strong> team"
    );
    assert_eq!(value["social_image_url"], serde_json::Value::Null);
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("head.html");
    let context = fixture_path("page.json");
    stdout_of(&[
        "--context",
        context.to_str().unwrap(),
        "--title-only",
        "-o",
        out_path.to_str().unwrap(),
    ]);
    assert_eq!(
        std::fs::read_to_string(&out_path).unwrap(),
        "<title>Blog | Acme</title>\n"
    );
}

#[test]
fn test_missing_context_fails() {
    let output = run(&["--context", "/nonexistent/page.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read context file"));
}
