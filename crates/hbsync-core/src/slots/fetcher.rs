use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::endpoints::SlotEndpoints;
use super::errors::FetchError;
use super::source::SlotSource;

/// Merged outcome of polling both endpoints for one process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotReport {
    pub current_slot: Option<u64>,
    pub target_slot: Option<u64>,
    /// True if either request produced no slot.
    pub any_failure: bool,
}

/// Pull a slot number out of a response body.
///
/// Accepts an object with an integer `slot` field (preferred) or a bare
/// non-negative integer. Everything else yields `None`.
pub fn extract_slot(value: &Value) -> Option<u64> {
    match value {
        Value::Object(fields) => fields.get("slot").and_then(Value::as_u64),
        other => other.as_u64(),
    }
}

/// Poll both slot endpoints for `process_id` concurrently.
///
/// The two requests are independent: one failing never affects the other.
/// A failed side leaves its slot as `None` and sets `any_failure`. Never
/// returns an error.
pub async fn fetch_slots<S: SlotSource>(
    source: &S,
    base_url: &str,
    process_id: &str,
) -> SlotReport {
    let endpoints = SlotEndpoints::new(base_url, process_id);

    let (target, current) = tokio::join!(
        fetch_slot(source, &endpoints.target),
        fetch_slot(source, &endpoints.current),
    );

    let target_slot = match target {
        Ok(slot) => Some(slot),
        Err(e) => {
            warn!(
                event = "core.slots.target_fetch_failed",
                process_id = process_id,
                url = %endpoints.target,
                error = %e
            );
            None
        }
    };

    let current_slot = match current {
        Ok(slot) => Some(slot),
        Err(e) => {
            warn!(
                event = "core.slots.current_fetch_failed",
                process_id = process_id,
                url = %endpoints.current,
                error = %e
            );
            None
        }
    };

    let report = SlotReport {
        current_slot,
        target_slot,
        any_failure: current_slot.is_none() || target_slot.is_none(),
    };

    debug!(
        event = "core.slots.fetch_completed",
        process_id = process_id,
        current_slot = ?report.current_slot,
        target_slot = ?report.target_slot,
        any_failure = report.any_failure
    );

    report
}

async fn fetch_slot<S: SlotSource>(source: &S, url: &str) -> Result<u64, FetchError> {
    let body = source.fetch_json(url).await?;
    extract_slot(&body).ok_or_else(|| FetchError::MissingSlot {
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::testing::{FakeSource, StubServer};
    use crate::slots::HttpSlotSource;
    use crate::config::HttpConfig;
    use serde_json::json;

    const BASE: &str = "https://node.example";

    fn endpoints(id: &str) -> SlotEndpoints {
        SlotEndpoints::new(BASE, id)
    }

    #[test]
    fn test_extract_slot_shapes() {
        assert_eq!(extract_slot(&json!({"slot": 10})), Some(10));
        assert_eq!(extract_slot(&json!(7)), Some(7));
        assert_eq!(extract_slot(&json!({"slot": 0})), Some(0));
        assert_eq!(extract_slot(&json!({"slot": 4, "other": 9})), Some(4));
    }

    #[test]
    fn test_extract_slot_rejects_other_shapes() {
        assert_eq!(extract_slot(&json!({"height": 10})), None);
        assert_eq!(extract_slot(&json!({"slot": "10"})), None);
        assert_eq!(extract_slot(&json!(-1)), None);
        assert_eq!(extract_slot(&json!(1.5)), None);
        assert_eq!(extract_slot(&json!("7")), None);
        assert_eq!(extract_slot(&json!(null)), None);
        assert_eq!(extract_slot(&json!([1])), None);
    }

    #[tokio::test]
    async fn test_fetch_slots_object_and_bare_bodies() {
        let ep = endpoints("abc");
        let source = FakeSource::new()
            .respond(&ep.target, Ok(json!({"slot": 10})))
            .respond(&ep.current, Ok(json!(7)));

        let report = fetch_slots(&source, BASE, "abc").await;

        assert_eq!(
            report,
            SlotReport {
                current_slot: Some(7),
                target_slot: Some(10),
                any_failure: false,
            }
        );
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_fetch_slots_one_side_fails() {
        let ep = endpoints("abc");
        let source = FakeSource::new()
            .respond(
                &ep.target,
                Err(FetchError::Network {
                    message: "connection reset".to_string(),
                }),
            )
            .respond(&ep.current, Ok(json!({"slot": 4})));

        let report = fetch_slots(&source, BASE, "abc").await;

        assert_eq!(report.current_slot, Some(4));
        assert_eq!(report.target_slot, None);
        assert!(report.any_failure);
    }

    #[tokio::test]
    async fn test_fetch_slots_unparsable_body_counts_as_failure() {
        let ep = endpoints("abc");
        let source = FakeSource::new()
            .respond(&ep.target, Ok(json!({"slot": 12})))
            .respond(&ep.current, Ok(json!({"status": "ok"})));

        let report = fetch_slots(&source, BASE, "abc").await;

        assert_eq!(report.target_slot, Some(12));
        assert_eq!(report.current_slot, None);
        assert!(report.any_failure);
    }

    #[tokio::test]
    async fn test_fetch_slots_both_fail() {
        let source = FakeSource::new();

        let report = fetch_slots(&source, BASE, "abc").await;

        assert_eq!(report.current_slot, None);
        assert_eq!(report.target_slot, None);
        assert!(report.any_failure);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_fetch_slots_requests_both_endpoints() {
        let source = FakeSource::new();
        fetch_slots(&source, BASE, "xyz").await;

        let mut requested = source.requested();
        requested.sort();
        let ep = endpoints("xyz");
        let mut expected = vec![ep.current, ep.target];
        expected.sort();
        assert_eq!(requested, expected);
    }

    #[tokio::test]
    async fn test_fetch_slots_over_http() {
        let server = StubServer::start(vec![
            ("/abc~process@1.0/slot/current", 200, r#"{"slot": 10}"#),
            ("/abc~process@1.0/compute/at-slot", 200, "7"),
        ])
        .await;
        let source = HttpSlotSource::new(&HttpConfig::default()).unwrap();

        let report = fetch_slots(&source, server.base_url(), "abc").await;

        assert_eq!(report.current_slot, Some(7));
        assert_eq!(report.target_slot, Some(10));
        assert!(!report.any_failure);
    }
}
