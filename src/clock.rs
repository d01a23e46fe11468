//! Wall-clock timestamps.

use chrono::Utc;

/// Current wall-clock time since the Unix epoch, in milliseconds.
///
/// Sub-millisecond precision is kept in the fractional part. No caching, no
/// monotonicity guarantee beyond what the platform clock provides.
pub fn time_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000.0
}
