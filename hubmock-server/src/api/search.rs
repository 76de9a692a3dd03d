//! Chart-of-accounts search endpoint
//!
//! Returns one of three canned result shapes selected by the `mode` query
//! parameter: empty, simulated failure, or a single fixed record. The
//! request body, if any, is ignored.

use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use tracing::info;

use hubmock_common::api::{CoaRecord, Mode, ResponseStatus, SearchResponse};
use hubmock_common::time;

/// Query parameters for COA search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Canned outcome selector (ok | empty | error), default ok
    pub mode: Option<String>,
}

/// The one hard-coded record returned by every successful search
///
/// Callers assert exact values against this, so changing any field is a
/// breaking change for downstream test suites.
fn canned_record() -> CoaRecord {
    CoaRecord {
        account_number: "1000-000-5210".to_string(),
        account_description: "Cash and Cash Equivalents".to_string(),
        account_type: "ASSET".to_string(),
        enabled_flag: "Y".to_string(),
        summary_flag: "N".to_string(),
        created_by: "HUB_BATCH".to_string(),
        created_date: "2023-04-12T08:15:00.000Z".to_string(),
        last_updated_by: "HUB_BATCH".to_string(),
        last_updated_date: "2024-01-15T09:30:00.000Z".to_string(),
    }
}

/// GET /api/v1/coas/search?mode={ok|empty|error}
///
/// Always HTTP 200; `mode=error` signals failure inside the payload only.
pub async fn coa_search(Query(query): Query<SearchQuery>) -> Json<SearchResponse> {
    let mode = Mode::from_param(query.mode.as_deref());

    let response = match mode {
        Mode::Empty => SearchResponse {
            status: ResponseStatus::Success,
            message: "COA search completed".to_string(),
            timestamp: time::rfc3339_now(),
            record_count: 0,
            coas: vec![],
            error_message: None,
        },
        Mode::Error => SearchResponse {
            status: ResponseStatus::Failure,
            message: "COA search failed".to_string(),
            timestamp: time::rfc3339_now(),
            record_count: 0,
            coas: vec![],
            error_message: Some("Simulated HUB search failure".to_string()),
        },
        // ok, partial, and anything unrecognized: single-record success
        _ => {
            let record = canned_record();
            SearchResponse {
                status: ResponseStatus::Success,
                message: "COA search completed".to_string(),
                timestamp: time::rfc3339_now(),
                record_count: 1,
                coas: vec![record],
                error_message: None,
            }
        }
    };

    info!(
        "COA search mode={:?} -> {} record(s), status {:?}",
        mode, response.record_count, response.status
    );

    Json(response)
}

/// Build search routes
pub fn search_routes() -> Router {
    Router::new().route("/api/v1/coas/search", get(coa_search))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_record_is_stable() {
        let record = canned_record();
        assert_eq!(record.account_number, "1000-000-5210");
        assert_eq!(record.enabled_flag, "Y");
        assert_eq!(record.summary_flag, "N");
    }
}
