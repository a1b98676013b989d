//! Core error type.
//!
//! Other crates define their own error enums; this one only covers what
//! `lift-core` itself can fail at, which is loading and validating a
//! [`SimConfig`][crate::SimConfig].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
