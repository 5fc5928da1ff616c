//! Failure taxonomy for a generation run.
//!
//! Every variant aborts the run: nothing here is caught, retried, or
//! downgraded to a warning. An aborted write may leave a truncated output
//! file, which is acceptable because regeneration is deterministic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The template artifact could not be read at the expected location
    #[error("template not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The template artifact is malformed and was rejected at compile time
    #[error("template syntax error in {name}")]
    TemplateSyntax {
        name: String,
        #[source]
        source: minijinja::Error,
    },
    /// Template evaluation failed (e.g. an undefined name or helper misuse)
    #[error("failed to render template {name}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
    /// The rendered text could not be persisted to the output path
    #[error("failed to write generated file to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration is rejected before any rendering happens
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
