//! Shared API response types
//!
//! Wire contract for the mocked HUB endpoints. Field names follow the HUB
//! convention (camelCase); every endpoint answers HTTP 200 and communicates
//! simulated failure only through `status` inside the payload.

use serde::{Deserialize, Serialize};

// ========================================
// Canned Outcome Selection
// ========================================

/// Canned outcome variant selected per request via the `mode` query
/// parameter. Never persisted; absent or unrecognized values select `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full success (default)
    Ok,
    /// Success with zero items
    Empty,
    /// Success with a simulated subset of failed lines (imports only)
    Partial,
    /// Simulated total failure, still HTTP 200
    Error,
}

impl Mode {
    /// Parse a `mode` query parameter, case-insensitively
    ///
    /// # Examples
    ///
    /// ```
    /// use hubmock_common::api::Mode;
    ///
    /// assert_eq!(Mode::from_param(Some("PARTIAL")), Mode::Partial);
    /// assert_eq!(Mode::from_param(Some("bogus")), Mode::Ok);
    /// assert_eq!(Mode::from_param(None), Mode::Ok);
    /// ```
    pub fn from_param(param: Option<&str>) -> Mode {
        match param.map(str::to_ascii_lowercase).as_deref() {
            Some("empty") => Mode::Empty,
            Some("partial") => Mode::Partial,
            Some("error") => Mode::Error,
            // "ok", absent, and anything unrecognized fall through to the
            // ok baseline (intentionally permissive mock behavior)
            _ => Mode::Ok,
        }
    }
}

/// Payload-level status string (`Success` / `Failure`)
///
/// Deliberately decoupled from the HTTP status code, which is always 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Success,
    Failure,
}

// ========================================
// Import Envelope
// ========================================

/// One synthetic per-line error inside an import envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportErrorDetail {
    pub line_no: u64,
    pub message: String,
}

/// Response envelope for the six master-data import endpoints
///
/// Count invariants: `success_count + fail_count == processed_count` when
/// both derive from the same baseline, and `processed_count <=
/// received_count`. Error mode intentionally reports all received lines as
/// failed with nothing processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub status: ResponseStatus,
    pub message: String,
    /// RFC 3339, freshly generated per call
    pub timestamp: String,
    /// UUID v4, freshly generated per call (traceability only)
    pub request_id: String,
    /// Synthetic job identifier, `mock-<epoch millis>`
    pub job_id: String,
    pub received_count: u64,
    pub processed_count: u64,
    pub success_count: u64,
    pub fail_count: u64,
    pub errors: Vec<ImportErrorDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_line_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

// ========================================
// Search Envelope
// ========================================

/// Fixed-shape chart-of-accounts record
///
/// Immutable and hard-coded for the search success case so callers can
/// assert exact field values in their integration tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoaRecord {
    pub account_number: String,
    pub account_description: String,
    pub account_type: String,
    pub enabled_flag: String,
    pub summary_flag: String,
    pub created_by: String,
    pub created_date: String,
    pub last_updated_by: String,
    pub last_updated_date: String,
}

/// Response envelope for chart-of-accounts search
///
/// Invariant: `record_count == coas.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub timestamp: String,
    pub record_count: u64,
    pub coas: Vec<CoaRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
