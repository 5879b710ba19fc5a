use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::services::archive_id::ArchiveId;
use super::upcoming_event::UpcomingEvent;

/// An archived event, either authored directly by editors (usually with
/// gallery images) or derived from an expired [`UpcomingEvent`].
/// `source_event_id` is a back-reference only: the record outlives the
/// upcoming event it was migrated from.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PastEvent {
    pub id: String,
    pub dataset: String,
    pub title: String,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub source_event_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PastEvent {
    pub fn new(dataset: String, title: String, date: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            dataset,
            title,
            date,
            description: None,
            image_urls: Vec::new(),
            source_event_id: None,
            created_at: Utc::now(),
        }
    }

    /// The persisted mirror of an expired upcoming event. The derived id is
    /// the create-if-absent key that keeps repeated passes from duplicating
    /// the record.
    pub fn archived_from(event: &UpcomingEvent) -> Self {
        Self {
            id: ArchiveId::persisted(&event.id).into_string(),
            dataset: event.dataset.clone(),
            title: display_title(&event.title),
            date: event.date.clone(),
            description: event.description.clone(),
            image_urls: Vec::new(),
            source_event_id: Some(event.id.clone()),
            created_at: Utc::now(),
        }
    }

    /// A display-only projection used when the store has no write
    /// capability. Never persisted.
    pub fn transient_from(event: &UpcomingEvent) -> Self {
        Self {
            id: ArchiveId::transient(&event.id).into_string(),
            dataset: event.dataset.clone(),
            title: display_title(&event.title),
            date: event.date.clone(),
            description: event.description.clone(),
            image_urls: Vec::new(),
            source_event_id: Some(event.id.clone()),
            created_at: Utc::now(),
        }
    }
}

fn display_title(title: &str) -> String {
    if title.is_empty() {
        "Untitled event".to_string()
    } else {
        title.to_string()
    }
}
