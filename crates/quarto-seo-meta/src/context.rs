/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Page context types.
//!
//! A [`PageContext`] is the snapshot of page and template variables the host
//! renderer hands over for a single render. Lookups never fail: a missing key
//! reads as an empty value.

use std::collections::HashMap;

/// A value stored in the page context.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// A string value.
    String(String),

    /// A boolean value.
    Bool(bool),

    /// A numeric value, kept in its textual form.
    Number(String),

    /// A list of values.
    List(Vec<ContextValue>),

    /// A map of string keys to values.
    Map(HashMap<String, ContextValue>),

    /// A null/missing value.
    Null,
}

impl ContextValue {
    /// Get a nested field by path.
    ///
    /// For example, `get_path(&["app", "name"])` on a Map containing
    /// `{"app": {"name": "Acme"}}` returns the name value.
    pub fn get_path(&self, path: &[&str]) -> Option<&ContextValue> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };

        match self {
            ContextValue::Map(m) => m.get(*first).and_then(|v| v.get_path(rest)),
            _ => None,
        }
    }

    /// Render this value as a string.
    ///
    /// - String / Number: returned as-is
    /// - Bool: "true" or "" (empty for false)
    /// - List: concatenation of rendered elements
    /// - Map: "true"
    /// - Null: ""
    pub fn render(&self) -> String {
        match self {
            ContextValue::String(s) | ContextValue::Number(s) => s.clone(),
            ContextValue::Bool(true) => "true".to_string(),
            ContextValue::Bool(false) => String::new(),
            ContextValue::List(items) => items.iter().map(ContextValue::render).collect(),
            ContextValue::Map(_) => "true".to_string(),
            ContextValue::Null => String::new(),
        }
    }
}

impl Default for ContextValue {
    fn default() -> Self {
        ContextValue::Null
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::String(s.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::String(s)
    }
}

impl From<serde_json::Value> for ContextValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ContextValue::Null,
            serde_json::Value::Bool(b) => ContextValue::Bool(b),
            serde_json::Value::Number(n) => ContextValue::Number(n.to_string()),
            serde_json::Value::String(s) => ContextValue::String(s),
            serde_json::Value::Array(items) => {
                ContextValue::List(items.into_iter().map(ContextValue::from).collect())
            }
            serde_json::Value::Object(map) => ContextValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, ContextValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for ContextValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => ContextValue::Null,
            serde_yaml::Value::Bool(b) => ContextValue::Bool(b),
            serde_yaml::Value::Number(n) => ContextValue::Number(n.to_string()),
            serde_yaml::Value::String(s) => ContextValue::String(s),
            serde_yaml::Value::Sequence(items) => {
                ContextValue::List(items.into_iter().map(ContextValue::from).collect())
            }
            serde_yaml::Value::Mapping(map) => ContextValue::Map(
                map.into_iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|k| (k, ContextValue::from(v))))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => ContextValue::from(tagged.value),
        }
    }
}

/// Mapping keys are kept only when they are scalars.
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Variables visible to the meta tags of one page render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    variables: HashMap<String, ContextValue>,
}

impl PageContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object. Non-object input yields an empty
    /// context.
    pub fn from_json(value: serde_json::Value) -> Self {
        match ContextValue::from(value) {
            ContextValue::Map(variables) => Self { variables },
            _ => Self::default(),
        }
    }

    /// Build a context from a YAML mapping. Non-mapping input yields an
    /// empty context.
    pub fn from_yaml(value: serde_yaml::Value) -> Self {
        match ContextValue::from(value) {
            ContextValue::Map(variables) => Self { variables },
            _ => Self::default(),
        }
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a raw value.
    ///
    /// The literal key is tried first, so a flat `"config.app.name"` entry
    /// wins over a nested `config -> app -> name` one.
    pub fn lookup(&self, key: &str) -> Option<&ContextValue> {
        if let Some(value) = self.variables.get(key) {
            return Some(value);
        }
        let path: Vec<&str> = key.split('.').collect();
        if path.len() < 2 {
            return None;
        }
        self.variables
            .get(path[0])
            .and_then(|v| v.get_path(&path[1..]))
    }

    /// Get a variable rendered as a string, `None` when absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lookup(key).map(ContextValue::render)
    }

    /// Get a variable rendered as a string, empty when absent.
    pub fn value(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }

    /// Get a variable only if it renders to a non-empty string.
    pub fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|s| !s.is_empty())
    }
}
