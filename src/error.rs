use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the fallible (`try_*`) entry points.
///
/// The convenience wrappers (`get_app_version`, `is_url_valid`) swallow these
/// and return their fixed fallback values instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read API spec {path}: {source}")]
    ReadSpec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse API spec: {0}")]
    ParseSpec(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    ParseUrl(#[from] url::ParseError),
}
