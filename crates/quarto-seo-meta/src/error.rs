/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for meta tag resolution.
//!
//! Missing page values and empty settings are not errors; they fall through
//! to the next source in the chain. Only failures of the backing stores end
//! up here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the collaborators the resolver reads from.
#[derive(Debug, Error)]
pub enum MetaError {
    /// The settings backend failed to produce a value.
    #[error("Settings error in collection '{collection}': {message}")]
    Settings { collection: String, message: String },

    /// The asset catalog could not be listed.
    #[error("Asset catalog error: {message}")]
    Assets { message: String },

    /// A context, settings or asset file could not be parsed.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// I/O error (e.g., reading a settings file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for meta tag operations.
pub type MetaResult<T> = Result<T, MetaError>;
