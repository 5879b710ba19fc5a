use std::collections::HashSet;
use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::models::{past_event::PastEvent, upcoming_event::UpcomingEvent};
use crate::domain::ports::{PastEventRepository, UpcomingEventRepository};

/// Migrates upcoming events whose date has elapsed into the past-events
/// collection and returns the unified archive, newest first.
///
/// Every method is total: store failures are logged and resolve to an empty
/// list, since this feeds a public content page rather than a transactional
/// flow. Repeated or concurrent passes are safe — the derived past-event id
/// is the create-if-absent key, and a source event is only deleted once its
/// mirror is confirmed.
pub struct EventArchiver {
    namespace: Option<String>,
    write_enabled: bool,
    upcoming_repo: Arc<dyn UpcomingEventRepository>,
    past_repo: Arc<dyn PastEventRepository>,
}

impl EventArchiver {
    pub fn new(
        namespace: Option<String>,
        write_enabled: bool,
        upcoming_repo: Arc<dyn UpcomingEventRepository>,
        past_repo: Arc<dyn PastEventRepository>,
    ) -> Self {
        Self {
            namespace,
            write_enabled,
            upcoming_repo,
            past_repo,
        }
    }

    pub async fn resolve_past_events(&self) -> Vec<PastEvent> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        self.resolve_past_events_at(&today).await
    }

    /// One archive pass against a caller-supplied "today" (ISO date).
    pub async fn resolve_past_events_at(&self, today: &str) -> Vec<PastEvent> {
        let Some(dataset) = self.namespace.as_deref() else {
            return Vec::new();
        };

        // The two fetches are independent.
        let (upcoming, past) = tokio::join!(
            self.upcoming_repo.list(dataset),
            self.past_repo.list(dataset)
        );
        let upcoming = match upcoming {
            Ok(events) => events,
            Err(e) => {
                warn!("Failed to fetch upcoming events: {:?}", e);
                return Vec::new();
            }
        };
        let past = match past {
            Ok(events) => events,
            Err(e) => {
                warn!("Failed to fetch past events: {:?}", e);
                return Vec::new();
            }
        };

        let ended: Vec<&UpcomingEvent> = upcoming
            .iter()
            .filter(|e| e.date.as_deref().is_some_and(|d| d < today))
            .collect();
        let linked: HashSet<&str> = past
            .iter()
            .filter_map(|p| p.source_event_id.as_deref())
            .collect();

        if !self.write_enabled {
            if !past.is_empty() {
                let mut past = past;
                sort_newest_first(&mut past);
                return past;
            }
            // No write capability and nothing archived yet: project the
            // ended events into a display-only view instead.
            let mut transient: Vec<PastEvent> = ended
                .iter()
                .filter(|e| !linked.contains(e.id.as_str()))
                .map(|e| PastEvent::transient_from(e))
                .collect();
            sort_newest_first(&mut transient);
            return transient;
        }

        self.archive_ended(dataset, &ended, &linked).await;

        match self.past_repo.list(dataset).await {
            Ok(mut refreshed) => {
                sort_newest_first(&mut refreshed);
                refreshed
            }
            Err(e) => {
                warn!("Failed to re-fetch past events after archiving: {:?}", e);
                Vec::new()
            }
        }
    }

    /// Mirrors ended events into the past collection, then removes the
    /// stale sources. Creates run before deletes so an interrupted pass
    /// cannot drop an event that has no mirror yet; an event whose create
    /// failed is kept for the next pass to retry.
    async fn archive_ended(
        &self,
        dataset: &str,
        ended: &[&UpcomingEvent],
        linked: &HashSet<&str>,
    ) {
        let mut confirmed: Vec<&str> = Vec::new();

        for event in ended {
            if linked.contains(event.id.as_str()) {
                // Mirrored on an earlier pass; only the stale source is left.
                confirmed.push(event.id.as_str());
                continue;
            }

            let record = PastEvent::archived_from(event);
            match self.past_repo.create_if_absent(&record).await {
                Ok(created) => {
                    if created {
                        info!("Archived ended event {} as {}", event.id, record.id);
                    }
                    confirmed.push(event.id.as_str());
                }
                Err(e) => {
                    warn!("Failed to archive ended event {}: {:?}", event.id, e);
                }
            }
        }

        for id in confirmed {
            if let Err(e) = self.upcoming_repo.delete(dataset, id).await {
                warn!("Failed to remove ended upcoming event {}: {:?}", id, e);
            }
        }
    }
}

/// Descending by date string (safe for zero-padded ISO dates); records
/// without a date sort last.
pub fn sort_newest_first(events: &mut [PastEvent]) {
    events.sort_by(|a, b| {
        b.date
            .as_deref()
            .unwrap_or("")
            .cmp(a.date.as_deref().unwrap_or(""))
    });
}
