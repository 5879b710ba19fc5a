use org_site_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::{
        PastEventRepository, SiteContentRepository, TeamMemberRepository, UpcomingEventRepository,
    },
    domain::services::{archive::EventArchiver, content::ContentResolver},
    infra::repositories::{
        sqlite_past_event_repo::SqlitePastEventRepo,
        sqlite_site_content_repo::SqliteSiteContentRepo,
        sqlite_team_member_repo::SqliteTeamMemberRepo,
        sqlite_upcoming_event_repo::SqliteUpcomingEventRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::Router;

#[allow(dead_code)]
pub const EDITOR_TOKEN: &str = "test-editor-token";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    /// Fully configured app: namespace present, write token present.
    pub async fn new() -> Self {
        Self::build(true, Some(EDITOR_TOKEN)).await
    }

    /// Namespace present but no write token: the archiver degrades to its
    /// read-only fallback and the editor API answers 503.
    pub async fn read_only() -> Self {
        Self::build(true, None).await
    }

    /// No content namespace configured: every read short-circuits to its
    /// default.
    pub async fn unconfigured() -> Self {
        Self::build(false, Some(EDITOR_TOKEN)).await
    }

    async fn build(configured: bool, write_token: Option<&str>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            project_id: configured.then(|| "campus".to_string()),
            dataset: configured.then(|| "production".to_string()),
            write_token: write_token.map(|t| t.to_string()),
        };

        let upcoming_repo: Arc<dyn UpcomingEventRepository> =
            Arc::new(SqliteUpcomingEventRepo::new(pool.clone()));
        let past_repo: Arc<dyn PastEventRepository> =
            Arc::new(SqlitePastEventRepo::new(pool.clone()));
        let team_repo: Arc<dyn TeamMemberRepository> =
            Arc::new(SqliteTeamMemberRepo::new(pool.clone()));
        let site_repo: Arc<dyn SiteContentRepository> =
            Arc::new(SqliteSiteContentRepo::new(pool.clone()));

        let resolver = Arc::new(ContentResolver::new(
            config.namespace(),
            upcoming_repo.clone(),
            team_repo.clone(),
            site_repo.clone(),
        ));
        let archiver = Arc::new(EventArchiver::new(
            config.namespace(),
            config.can_write(),
            upcoming_repo.clone(),
            past_repo.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            upcoming_repo,
            past_repo,
            team_repo,
            site_repo,
            resolver,
            archiver,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// The dataset value records are stored under in a configured app.
    pub fn dataset(&self) -> String {
        self.state.config.namespace().expect("TestApp has no namespace configured")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
