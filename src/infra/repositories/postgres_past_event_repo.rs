use crate::domain::{models::past_event::PastEvent, ports::PastEventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub struct PostgresPastEventRepo {
    pool: PgPool,
}

impl PostgresPastEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PastEventRow {
    id: String,
    dataset: String,
    title: String,
    date: Option<String>,
    description: Option<String>,
    image_urls: String,
    source_event_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PastEventRow> for PastEvent {
    fn from(row: PastEventRow) -> Self {
        PastEvent {
            id: row.id,
            dataset: row.dataset,
            title: row.title,
            date: row.date,
            description: row.description,
            image_urls: serde_json::from_str(&row.image_urls).unwrap_or_default(),
            source_event_id: row.source_event_id,
            created_at: row.created_at,
        }
    }
}

fn image_urls_json(event: &PastEvent) -> String {
    serde_json::to_string(&event.image_urls).unwrap_or_else(|_| "[]".to_string())
}

#[async_trait]
impl PastEventRepository for PostgresPastEventRepo {
    async fn create(&self, event: &PastEvent) -> Result<PastEvent, AppError> {
        sqlx::query_as::<_, PastEventRow>(
            r#"INSERT INTO past_events (
                id, dataset, title, date, description, image_urls, source_event_id, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *"#
        )
            .bind(&event.id)
            .bind(&event.dataset)
            .bind(&event.title)
            .bind(&event.date)
            .bind(&event.description)
            .bind(image_urls_json(event))
            .bind(&event.source_event_id)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map(PastEvent::from)
            .map_err(AppError::Database)
    }

    async fn create_if_absent(&self, event: &PastEvent) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO past_events (
                id, dataset, title, date, description, image_urls, source_event_id, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING"#
        )
            .bind(&event.id)
            .bind(&event.dataset)
            .bind(&event.title)
            .bind(&event.date)
            .bind(&event.description)
            .bind(image_urls_json(event))
            .bind(&event.source_event_id)
            .bind(event.created_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, dataset: &str) -> Result<Vec<PastEvent>, AppError> {
        let rows = sqlx::query_as::<_, PastEventRow>(
            "SELECT * FROM past_events WHERE dataset = $1 ORDER BY date DESC",
        )
            .bind(dataset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(PastEvent::from).collect())
    }
}
