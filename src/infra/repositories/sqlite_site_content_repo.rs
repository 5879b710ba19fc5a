use crate::domain::{
    models::site_content::{MissionPage, SiteSettings},
    ports::SiteContentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

pub struct SqliteSiteContentRepo {
    pool: SqlitePool,
}

impl SqliteSiteContentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SettingsRow {
    groupme_link: Option<String>,
    email: Option<String>,
}

#[derive(FromRow)]
struct MissionPageRow {
    headline: Option<String>,
    mission_paragraph_1: Option<String>,
    mission_paragraph_2: Option<String>,
    core_goals: String,
}

impl From<MissionPageRow> for MissionPage {
    fn from(row: MissionPageRow) -> Self {
        MissionPage {
            headline: row.headline,
            mission_paragraph_1: row.mission_paragraph_1,
            mission_paragraph_2: row.mission_paragraph_2,
            core_goals: serde_json::from_str(&row.core_goals).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl SiteContentRepository for SqliteSiteContentRepo {
    async fn get_settings(&self, dataset: &str) -> Result<Option<SiteSettings>, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            "SELECT groupme_link, email FROM site_settings WHERE dataset = ?",
        )
            .bind(dataset)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(row.map(|r| SiteSettings {
            groupme_link: r.groupme_link,
            email: r.email,
        }))
    }

    async fn upsert_settings(&self, dataset: &str, settings: &SiteSettings) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO site_settings (dataset, groupme_link, email)
               VALUES (?, ?, ?)
               ON CONFLICT (dataset) DO UPDATE SET
                   groupme_link = excluded.groupme_link,
                   email = excluded.email"#
        )
            .bind(dataset)
            .bind(&settings.groupme_link)
            .bind(&settings.email)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn get_mission_page(&self, dataset: &str) -> Result<Option<MissionPage>, AppError> {
        let row = sqlx::query_as::<_, MissionPageRow>(
            r#"SELECT headline, mission_paragraph_1, mission_paragraph_2, core_goals
               FROM mission_pages WHERE dataset = ?"#
        )
            .bind(dataset)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(row.map(MissionPage::from))
    }

    async fn upsert_mission_page(&self, dataset: &str, page: &MissionPage) -> Result<(), AppError> {
        let core_goals = serde_json::to_string(&page.core_goals)
            .unwrap_or_else(|_| "[]".to_string());

        sqlx::query(
            r#"INSERT INTO mission_pages (dataset, headline, mission_paragraph_1, mission_paragraph_2, core_goals)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT (dataset) DO UPDATE SET
                   headline = excluded.headline,
                   mission_paragraph_1 = excluded.mission_paragraph_1,
                   mission_paragraph_2 = excluded.mission_paragraph_2,
                   core_goals = excluded.core_goals"#
        )
            .bind(dataset)
            .bind(&page.headline)
            .bind(&page.mission_paragraph_1)
            .bind(&page.mission_paragraph_2)
            .bind(core_goals)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
