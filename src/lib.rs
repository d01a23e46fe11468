//! # apputil
//!
//! Small helper utilities shared across backend services: application version
//! discovery, wall-clock timestamps, and syntactic URL validation. The three
//! helpers are stateless and independent of each other.
//!
//! ## Modules
//!
//! - `clock` - wall-clock timestamps in floating-point milliseconds
//! - `error` - typed errors for the fallible entry points
//! - `urlcheck` - syntactic URL validation
//! - `version` - application version discovery from the API spec file

pub mod clock;
pub mod error;
pub mod urlcheck;
pub mod version;

pub use clock::time_now;
pub use error::Error;
pub use urlcheck::{is_url_valid, try_parse_url};
pub use version::{get_app_version, try_app_version, SWAGGER_FILE, UNKNOWN_VERSION};
