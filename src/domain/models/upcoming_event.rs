use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// An event authored by content editors for the upcoming-events calendar.
/// `date` is the sole lifecycle key: once it falls strictly before today
/// (UTC), the archiver migrates the record into the past-events collection.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct UpcomingEvent {
    pub id: String,
    pub dataset: String,
    pub title: String,
    /// ISO "YYYY-MM-DD". Zero-padded, so lexicographic comparison is
    /// date comparison.
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub rsvp_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UpcomingEvent {
    pub fn new(dataset: String, title: String, date: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            dataset,
            title,
            date,
            time: None,
            location: None,
            description: None,
            rsvp_link: None,
            created_at: Utc::now(),
        }
    }
}
