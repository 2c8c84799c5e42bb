use std::sync::Arc;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

use super::notice::Notice;
use crate::dashboard::Dashboard;
use crate::registry::ProcessUpdate;
use crate::slots::{SlotReport, SlotSource, fetch_slots};
use crate::storage::KeyValueStore;

/// Drives slot refreshes for the dashboard's processes.
///
/// Each process fetch runs in its own spawned task; the dashboard is only
/// touched from the caller's task. No retries, no cancellation: every call
/// attempts each fetch exactly once and runs to completion.
pub struct Reconciler<S> {
    source: Arc<S>,
}

impl<S: SlotSource> Reconciler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Refresh a single process.
    ///
    /// Returns `UrlNotSet` / `NotTracked` without touching the network when the
    /// URL is unset or the id unknown. Otherwise the record is marked loading,
    /// fetched, and updated; `loading` is cleared even if the fetch task dies.
    pub async fn refresh_one<K: KeyValueStore>(
        &self,
        dashboard: &mut Dashboard<K>,
        process_id: &str,
    ) -> Vec<Notice> {
        if !dashboard.has_url() {
            warn!(event = "core.sync.refresh_skipped_no_url", process_id = process_id);
            return vec![Notice::UrlNotSet];
        }
        if !dashboard.registry().contains(process_id) {
            warn!(event = "core.sync.refresh_skipped_untracked", process_id = process_id);
            return vec![Notice::NotTracked {
                process_id: process_id.to_string(),
            }];
        }

        info!(event = "core.sync.refresh_one_started", process_id = process_id);

        dashboard.update_process(process_id, &ProcessUpdate::new().loading(true));
        let outcome = self
            .spawn_fetch(dashboard.url().to_string(), process_id.to_string())
            .await;

        let mut notices = Vec::new();
        match apply_outcome(dashboard, process_id, outcome) {
            FetchOutcome::Complete => {}
            FetchOutcome::Partial => notices.push(Notice::PartialFailure {
                process_id: process_id.to_string(),
            }),
            FetchOutcome::Aborted => notices.push(Notice::FetchFailed {
                process_id: process_id.to_string(),
            }),
        }

        info!(
            event = "core.sync.refresh_one_completed",
            process_id = process_id,
            notices = notices.len()
        );
        notices
    }

    /// Refresh every tracked process concurrently.
    ///
    /// All records are marked loading before any request goes out. Records
    /// are updated in completion order. Per-process failures are logged only;
    /// the run always ends with a single `AllRefreshed` notice.
    pub async fn refresh_all<K: KeyValueStore>(&self, dashboard: &mut Dashboard<K>) -> Vec<Notice> {
        if !dashboard.has_url() {
            warn!(event = "core.sync.refresh_all_skipped_no_url");
            return vec![Notice::UrlNotSet];
        }

        let ids = mark_all_loading(dashboard);
        let count = ids.len();
        info!(event = "core.sync.refresh_all_started", count = count);

        let base_url = dashboard.url().to_string();
        let mut pending: FuturesUnordered<_> = ids
            .into_iter()
            .map(|id| {
                let handle = self.spawn_fetch(base_url.clone(), id.clone());
                async move { (id, handle.await) }
            })
            .collect();

        let mut failed = 0usize;
        while let Some((id, outcome)) = pending.next().await {
            if apply_outcome(dashboard, &id, outcome) != FetchOutcome::Complete {
                failed += 1;
            }
        }

        info!(
            event = "core.sync.refresh_all_completed",
            count = count,
            failed = failed
        );
        vec![Notice::AllRefreshed { count }]
    }

    fn spawn_fetch(&self, base_url: String, process_id: String) -> JoinHandle<SlotReport> {
        let source = Arc::clone(&self.source);
        tokio::spawn(async move { fetch_slots(source.as_ref(), &base_url, &process_id).await })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchOutcome {
    Complete,
    Partial,
    Aborted,
}

fn mark_all_loading<K: KeyValueStore>(dashboard: &mut Dashboard<K>) -> Vec<String> {
    let ids = dashboard.registry().ids();
    for id in &ids {
        dashboard.update_process(id, &ProcessUpdate::new().loading(true));
    }
    ids
}

/// Write a finished fetch back into the record. `loading` is always cleared.
fn apply_outcome<K: KeyValueStore>(
    dashboard: &mut Dashboard<K>,
    process_id: &str,
    outcome: Result<SlotReport, JoinError>,
) -> FetchOutcome {
    match outcome {
        Ok(report) => {
            dashboard.update_process(
                process_id,
                &ProcessUpdate::new()
                    .current_slot(report.current_slot)
                    .target_slot(report.target_slot)
                    .loading(false),
            );
            if report.any_failure {
                warn!(
                    event = "core.sync.partial_failure",
                    process_id = process_id,
                    "Some data could not be fetched"
                );
                FetchOutcome::Partial
            } else {
                FetchOutcome::Complete
            }
        }
        Err(e) => {
            dashboard.update_process(process_id, &ProcessUpdate::new().loading(false));
            error!(
                event = "core.sync.fetch_task_failed",
                process_id = process_id,
                panicked = e.is_panic(),
                error = %e
            );
            FetchOutcome::Aborted
        }
    }
}
