//! Timestamp utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC timestamp as an RFC 3339 string (millisecond precision)
///
/// Used for the `timestamp` field of every response envelope.
pub fn rfc3339_now() -> String {
    now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch
///
/// Used to derive synthetic job identifiers (`mock-<epoch millis>`).
pub fn epoch_millis() -> u64 {
    now().timestamp_millis().max(0) as u64
}
