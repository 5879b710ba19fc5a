use crate::domain::{models::team_member::TeamMember, ports::TeamMemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTeamMemberRepo {
    pool: PgPool,
}

impl PostgresTeamMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepo {
    async fn create(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        sqlx::query_as::<_, TeamMember>(
            r#"INSERT INTO team_members (
                id, dataset, name, image_url, role, year, blurb, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *"#
        )
            .bind(&member.id)
            .bind(&member.dataset)
            .bind(&member.name)
            .bind(&member.image_url)
            .bind(&member.role)
            .bind(&member.year)
            .bind(&member.blurb)
            .bind(member.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, dataset: &str) -> Result<Vec<TeamMember>, AppError> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE dataset = $1 ORDER BY created_at ASC",
        )
            .bind(dataset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
