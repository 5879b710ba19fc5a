use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TeamMember {
    pub id: String,
    pub dataset: String,
    pub name: String,
    pub image_url: Option<String>,
    pub role: Option<String>,
    pub year: Option<String>,
    pub blurb: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(dataset: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            dataset,
            name,
            image_url: None,
            role: None,
            year: None,
            blurb: None,
            created_at: Utc::now(),
        }
    }
}
