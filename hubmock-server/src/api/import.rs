//! Master-data import endpoints
//!
//! One generic handler serves all six import endpoints, driven by a static
//! table of (route path, body array field, entity label). Each request is
//! answered with an ImportResponse envelope whose counts derive from the
//! body and whose outcome is selected by the `mode` query parameter.
//!
//! No request ever fails at the HTTP layer: malformed bodies count as zero
//! items, malformed query values fall back to defaults, and simulated
//! failure is reported inside the payload with HTTP 200.

use axum::{extract::Query, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use hubmock_common::api::{ImportErrorDetail, ImportResponse, Mode, ResponseStatus};
use hubmock_common::time;

use crate::counts::item_count;

/// One mocked import endpoint: route, body array field, display label
#[derive(Debug)]
pub struct ImportEndpoint {
    pub path: &'static str,
    pub field: &'static str,
    pub label: &'static str,
}

/// The six HUB master-data import endpoints
pub const IMPORT_ENDPOINTS: &[ImportEndpoint] = &[
    ImportEndpoint {
        path: "/api/v1/business-groups/import",
        field: "businessGroups",
        label: "Business Group",
    },
    ImportEndpoint {
        path: "/api/v1/customers/import",
        field: "customers",
        label: "Customer",
    },
    ImportEndpoint {
        path: "/api/v1/suppliers/import",
        field: "suppliers",
        label: "Supplier",
    },
    ImportEndpoint {
        path: "/api/v1/supplier-banks/import",
        field: "supplierBanks",
        label: "Supplier Bank",
    },
    ImportEndpoint {
        path: "/api/v1/exchange-rates/import",
        field: "exchangeRates",
        label: "Exchange Rate",
    },
    ImportEndpoint {
        path: "/api/v1/trades/import",
        field: "trades",
        label: "Trade",
    },
];

/// Query parameters for import endpoints
///
/// Both values are taken as free-form strings and parsed leniently so a
/// malformed value selects the default instead of a 400 rejection.
#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    /// Canned outcome selector (ok | empty | partial | error), default ok
    pub mode: Option<String>,
    /// Simulated failed-line count, partial mode only
    pub fail: Option<String>,
}

/// Build one route per entry in the endpoint table
pub fn import_routes() -> Router {
    let mut router = Router::new();
    for endpoint in IMPORT_ENDPOINTS {
        router = router.route(
            endpoint.path,
            post(move |query: Query<ImportQuery>, body: Option<Json<Value>>| {
                import(endpoint, query, body)
            }),
        );
    }
    router
}

/// POST /api/v1/<entity>/import?mode=...&fail=...
///
/// A missing or non-JSON body is treated as an empty one (zero items).
async fn import(
    endpoint: &'static ImportEndpoint,
    Query(query): Query<ImportQuery>,
    body: Option<Json<Value>>,
) -> Json<ImportResponse> {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);
    let mode = Mode::from_param(query.mode.as_deref());
    let fail_param = query.fail.as_deref().and_then(|s| s.parse::<u64>().ok());

    let count = item_count(&body, endpoint.field);
    let response = synthesize(endpoint, mode, count, fail_param);

    info!(
        "{} import mode={:?}: received {} processed {} success {} fail {}",
        endpoint.label,
        mode,
        response.received_count,
        response.processed_count,
        response.success_count,
        response.fail_count
    );

    Json(response)
}

/// Synthesize an import envelope from mode, item count, and fail override
///
/// Pure function; the timestamp, request id, and job id are the only
/// non-deterministic fields and are written exactly once, last.
fn synthesize(
    endpoint: &ImportEndpoint,
    mode: Mode,
    count: u64,
    fail_param: Option<u64>,
) -> ImportResponse {
    let mut status = ResponseStatus::Success;
    let mut errors = Vec::new();
    let mut error_line_number = None;
    let mut error_message = None;

    let (received, processed, success, fail) = match mode {
        // ok is also the fall-through for unrecognized mode values
        Mode::Ok => (count, count, count, 0),
        Mode::Empty => (0, 0, 0, 0),
        Mode::Partial => {
            // Default policy: one failed line when there is anything to fail
            let requested = fail_param.unwrap_or(u64::from(count > 0));
            let fail = requested.min(count);
            if fail > 0 {
                errors.push(ImportErrorDetail {
                    line_no: 1,
                    message: format!("{} validation failed (simulated)", endpoint.label),
                });
            }
            (count, count, count - fail, fail)
        }
        Mode::Error => {
            status = ResponseStatus::Failure;
            errors.push(ImportErrorDetail {
                line_no: 1,
                message: "Simulated HUB server error".to_string(),
            });
            error_line_number = Some(1);
            error_message = Some("Simulated HUB server error".to_string());
            (count, 0, 0, count)
        }
    };

    let message = match status {
        ResponseStatus::Success => format!("{} import completed", endpoint.label),
        ResponseStatus::Failure => format!("{} import failed", endpoint.label),
    };

    ImportResponse {
        status,
        message,
        timestamp: time::rfc3339_now(),
        request_id: Uuid::new_v4().to_string(),
        job_id: format!("mock-{}", time::epoch_millis()),
        received_count: received,
        processed_count: processed,
        success_count: success,
        fail_count: fail,
        errors,
        error_line_number,
        error_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> &'static ImportEndpoint {
        &IMPORT_ENDPOINTS[1] // customers
    }

    #[test]
    fn test_ok_mode_all_counts_equal() {
        let envelope = synthesize(endpoint(), Mode::Ok, 5, None);
        assert_eq!(envelope.status, ResponseStatus::Success);
        assert_eq!(envelope.received_count, 5);
        assert_eq!(envelope.processed_count, 5);
        assert_eq!(envelope.success_count, 5);
        assert_eq!(envelope.fail_count, 0);
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn test_empty_mode_zeroes_everything() {
        let envelope = synthesize(endpoint(), Mode::Empty, 42, Some(7));
        assert_eq!(envelope.status, ResponseStatus::Success);
        assert_eq!(envelope.received_count, 0);
        assert_eq!(envelope.processed_count, 0);
        assert_eq!(envelope.success_count, 0);
        assert_eq!(envelope.fail_count, 0);
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn test_partial_mode_with_explicit_fail() {
        let envelope = synthesize(endpoint(), Mode::Partial, 5, Some(2));
        assert_eq!(envelope.status, ResponseStatus::Success);
        assert_eq!(envelope.received_count, 5);
        assert_eq!(envelope.processed_count, 5);
        assert_eq!(envelope.success_count, 3);
        assert_eq!(envelope.fail_count, 2);
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].line_no, 1);
    }

    #[test]
    fn test_partial_mode_clamps_fail_to_processed() {
        let envelope = synthesize(endpoint(), Mode::Partial, 2, Some(9));
        assert_eq!(envelope.fail_count, 2);
        assert_eq!(envelope.success_count, 0);
        assert_eq!(envelope.processed_count, 2);
    }

    #[test]
    fn test_partial_mode_default_fail_is_one() {
        let envelope = synthesize(endpoint(), Mode::Partial, 4, None);
        assert_eq!(envelope.fail_count, 1);
        assert_eq!(envelope.success_count, 3);
        assert_eq!(envelope.errors.len(), 1);
    }

    #[test]
    fn test_partial_mode_empty_body_has_no_error_entry() {
        let envelope = synthesize(endpoint(), Mode::Partial, 0, None);
        assert_eq!(envelope.fail_count, 0);
        assert_eq!(envelope.success_count, 0);
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.status, ResponseStatus::Success);
    }

    #[test]
    fn test_partial_mode_preserves_count_invariant() {
        for (count, fail) in [(5, Some(2)), (3, None), (2, Some(9)), (0, Some(1))] {
            let envelope = synthesize(endpoint(), Mode::Partial, count, fail);
            assert_eq!(
                envelope.success_count + envelope.fail_count,
                envelope.processed_count
            );
            assert!(envelope.processed_count <= envelope.received_count);
        }
    }

    #[test]
    fn test_error_mode_fails_everything_received() {
        let envelope = synthesize(endpoint(), Mode::Error, 3, None);
        assert_eq!(envelope.status, ResponseStatus::Failure);
        assert_eq!(envelope.received_count, 3);
        assert_eq!(envelope.processed_count, 0);
        assert_eq!(envelope.success_count, 0);
        assert_eq!(envelope.fail_count, 3);
        assert_eq!(envelope.error_line_number, Some(1));
        assert!(envelope.error_message.is_some());
        assert_eq!(envelope.errors.len(), 1);
    }

    #[test]
    fn test_job_id_format() {
        let envelope = synthesize(endpoint(), Mode::Ok, 1, None);
        let digits = envelope.job_id.strip_prefix("mock-").unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_request_id_is_uuid() {
        let envelope = synthesize(endpoint(), Mode::Ok, 1, None);
        assert!(Uuid::parse_str(&envelope.request_id).is_ok());
    }

    #[test]
    fn test_message_names_the_entity() {
        let envelope = synthesize(endpoint(), Mode::Ok, 1, None);
        assert_eq!(envelope.message, "Customer import completed");

        let envelope = synthesize(endpoint(), Mode::Error, 1, None);
        assert_eq!(envelope.message, "Customer import failed");
    }
}
