use std::fs;
use std::path::{Path, PathBuf};

use glyphpad_core::FontCatalog;
use reqwest::header::{HeaderValue, USER_AGENT};

use super::errors::FontResourceError;

/// Catalog shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../../assets/fonts.json");

const FILE_SCHEME: &str = "file://";
const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];
const USER_AGENT_VALUE: &str =
    concat!("glyphpad/", env!("CARGO_PKG_VERSION"));

/// Load the font catalog, preferring the configured file over the embedded
/// one.
pub(crate) fn load_catalog(path: Option<&Path>) -> FontCatalog {
    if let Some(path) = path {
        match FontCatalog::from_path(path) {
            Ok(catalog) => return catalog,
            Err(err) => log::warn!(
                "failed to load catalog {}, using embedded catalog: {err}",
                path.display()
            ),
        }
    }

    embedded_catalog()
}

fn embedded_catalog() -> FontCatalog {
    match FontCatalog::from_json_str(EMBEDDED_CATALOG) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::warn!("embedded catalog is invalid: {err}");
            FontCatalog::default()
        },
    }
}

/// Where a font resource link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FontSource {
    Local(PathBuf),
    Remote(String),
}

/// Classify a font resource link: http(s) is remote, `file://` and plain
/// paths are local.
pub(crate) fn font_source(href: &str) -> FontSource {
    if REMOTE_SCHEMES.iter().any(|scheme| href.starts_with(scheme)) {
        return FontSource::Remote(href.to_string());
    }

    let path = href.strip_prefix(FILE_SCHEME).unwrap_or(href);
    FontSource::Local(PathBuf::from(path))
}

/// Read or download the bytes of a font resource.
pub(crate) async fn read_font_resource(
    href: String,
) -> Result<Vec<u8>, FontResourceError> {
    match font_source(&href) {
        FontSource::Local(path) => read_local_font(&path),
        FontSource::Remote(url) => fetch_remote_font(&url).await,
    }
}

fn read_local_font(path: &Path) -> Result<Vec<u8>, FontResourceError> {
    Ok(fs::read(path)?)
}

async fn fetch_remote_font(url: &str) -> Result<Vec<u8>, FontResourceError> {
    log::debug!("downloading font resource {url}");

    let response = reqwest::Client::new()
        .get(url)
        .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FontResourceError::Status {
            href: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}
