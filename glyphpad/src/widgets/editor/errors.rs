use thiserror::Error;

/// Errors emitted while fetching a font resource for the text area.
#[derive(Debug, Error)]
pub(crate) enum FontResourceError {
    #[error("font resource IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("font resource request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("font resource `{href}` answered with status {status}")]
    Status { href: String, status: u16 },
}
