// src/error.rs
use std::io;

use thiserror::Error;

/// Failures of the Extract action. Shown inline and dismissible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Please enter a valid URL")]
    EmptyUrl,

    #[error("Please enter a valid URL format (e.g., https://example.com)")]
    MalformedUrl,

    #[error("Failed to extract XPaths: {0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Preview controls used without the state they need.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewError {
    #[error("No URL available for preview")]
    NoUrl,

    #[error("No preview to refresh")]
    NothingToRefresh,
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("URL has no host")]
    NoHost,

    #[error("No known port for scheme '{0}'")]
    NoPort(String),

    #[error("Could not resolve {0}")]
    Resolve(String),

    #[error("HTTP error: {0}")]
    Status(String),

    #[error("Malformed HTTP response")]
    Malformed,

    #[error(transparent)]
    Io(#[from] io::Error),
}
