use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, info_span, Instrument};
use crate::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Periodically runs the same archive pass the past-events page triggers,
/// so expired events migrate even without page traffic. The pass is
/// idempotent, so overlapping with request-driven passes is harmless.
pub async fn start_archive_sweep(state: Arc<AppState>) {
    info!("Starting background archive sweep...");

    loop {
        let span = info_span!("archive_sweep");
        async {
            let past = state.archiver.resolve_past_events().await;
            info!("Archive sweep complete, {} past events", past.len());
        }
            .instrument(span)
            .await;

        sleep(SWEEP_INTERVAL).await;
    }
}
