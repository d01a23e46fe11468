//! Application version discovery from the API spec file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Name of the API spec file, resolved against the current working directory.
pub const SWAGGER_FILE: &str = "swagger.yaml";

/// Fallback returned when the version cannot be determined.
pub const UNKNOWN_VERSION: &str = "?.?.?";

/// The subset of the API spec document we care about. Unknown keys are
/// ignored.
#[derive(Debug, Deserialize)]
struct ApiDocument {
    info: ApiInfo,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    version: String,
}

/// Read the application version from the API spec document at `path`.
///
/// The document must carry a top-level `info` mapping with a string
/// `version` key. Error kinds stay distinguishable: [`Error::ReadSpec`] for
/// I/O failures, [`Error::ParseSpec`] for malformed YAML or a missing or
/// mistyped `info.version`.
pub fn try_app_version(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| Error::ReadSpec {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: ApiDocument = serde_yaml::from_str(&raw)?;
    Ok(doc.info.version)
}

/// Read the application version from `swagger.yaml` in the current working
/// directory.
///
/// Never fails: any error (missing file, malformed document, missing
/// `info.version`) is logged at warn level and collapsed into
/// [`UNKNOWN_VERSION`]. Callers that need to tell the failure kinds apart
/// should use [`try_app_version`] instead.
pub fn get_app_version() -> String {
    match try_app_version(SWAGGER_FILE) {
        Ok(version) => version,
        Err(err) => {
            tracing::warn!("Could not read app version from {SWAGGER_FILE}: {err}");
            UNKNOWN_VERSION.to_string()
        }
    }
}
