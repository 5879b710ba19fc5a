use crate::domain::{models::upcoming_event::UpcomingEvent, ports::UpcomingEventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUpcomingEventRepo {
    pool: PgPool,
}

impl PostgresUpcomingEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UpcomingEventRepository for PostgresUpcomingEventRepo {
    async fn create(&self, event: &UpcomingEvent) -> Result<UpcomingEvent, AppError> {
        sqlx::query_as::<_, UpcomingEvent>(
            r#"INSERT INTO upcoming_events (
                id, dataset, title, date, time, location, description, rsvp_link, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *"#
        )
            .bind(&event.id)
            .bind(&event.dataset)
            .bind(&event.title)
            .bind(&event.date)
            .bind(&event.time)
            .bind(&event.location)
            .bind(&event.description)
            .bind(&event.rsvp_link)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, dataset: &str, id: &str) -> Result<Option<UpcomingEvent>, AppError> {
        sqlx::query_as::<_, UpcomingEvent>(
            "SELECT * FROM upcoming_events WHERE dataset = $1 AND id = $2",
        )
            .bind(dataset)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, dataset: &str) -> Result<Vec<UpcomingEvent>, AppError> {
        sqlx::query_as::<_, UpcomingEvent>(
            "SELECT * FROM upcoming_events WHERE dataset = $1 ORDER BY date ASC",
        )
            .bind(dataset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, dataset: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM upcoming_events WHERE id = $1 AND dataset = $2")
            .bind(id)
            .bind(dataset)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}
