use std::io;

use thiserror::Error;

/// Errors emitted while parsing a font catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog IO failed: {0}")]
    Io(#[from] io::Error),

    #[error("catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but does not have the `{family: {key: url}}` shape.
    #[error("catalog shape invalid: {message}")]
    Shape { message: String },
}

/// Errors emitted by a [`crate::SettingsStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings store IO failed: {0}")]
    Io(#[from] io::Error),

    #[error("settings JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
