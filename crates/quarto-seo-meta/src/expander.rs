/*
 * expander.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Expression expansion for description-like values.
//!
//! Descriptions may embed template expressions that only the host template
//! engine understands. The resolver hands them to an [`ExpressionExpander`]
//! and treats the result as plain text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::context::PageContext;

/// Trait for expanding embedded template expressions in a string.
pub trait ExpressionExpander {
    /// Expand every expression in `input`.
    fn expand(&self, input: &str) -> String;
}

/// Expander that returns its input unchanged.
///
/// Use this when the host has already expanded its values, or in tests
/// where expansion should be ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullExpander;

impl ExpressionExpander for NullExpander {
    fn expand(&self, input: &str) -> String {
        input.to_string()
    }
}

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z0-9_]+)*)\s*\}\}")
        .expect("variable pattern is valid")
});

/// Expander that interpolates `{{ variable }}` references from a page
/// context.
///
/// Dotted paths (`{{ config.app.name }}`) are supported. Missing variables
/// expand to the empty string. Anything between braces that is not a plain
/// variable reference is left as written.
#[derive(Debug, Clone, Copy)]
pub struct ContextExpander<'a> {
    context: &'a PageContext,
}

impl<'a> ContextExpander<'a> {
    pub fn new(context: &'a PageContext) -> Self {
        Self { context }
    }
}

impl ExpressionExpander for ContextExpander<'_> {
    fn expand(&self, input: &str) -> String {
        VARIABLE_RE
            .replace_all(input, |caps: &Captures<'_>| self.context.value(&caps[1]))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> PageContext {
        PageContext::from_json(json!({
            "title": "Pricing",
            "summary": "Plans for every team",
            "config": { "app": { "name": "Acme" } }
        }))
    }

    #[test]
    fn test_null_expander_is_identity() {
        assert_eq!(NullExpander.expand("{{ title }} <b>x</b>"), "{{ title }} <b>x</b>");
    }

    #[test]
    fn test_expands_variables() {
        let ctx = context();
        let expander = ContextExpander::new(&ctx);
        assert_eq!(
            expander.expand("{{ title }}: {{summary}} from {{ config.app.name }}"),
            "Pricing: Plans for every team from Acme"
        );
    }

    #[test]
    fn test_missing_variable_expands_to_empty() {
        let ctx = context();
        assert_eq!(ContextExpander::new(&ctx).expand("[{{ nope }}]"), "[]");
    }

    #[test]
    fn test_non_variable_expressions_left_alone() {
        let ctx = context();
        let expander = ContextExpander::new(&ctx);
        assert_eq!(expander.expand("{{ title | upper }}"), "{{ title | upper }}");
        assert_eq!(expander.expand("open {{ title"), "open {{ title");
    }
}
