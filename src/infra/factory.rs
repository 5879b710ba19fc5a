use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{
    PastEventRepository, SiteContentRepository, TeamMemberRepository, UpcomingEventRepository,
};
use crate::domain::services::{archive::EventArchiver, content::ContentResolver};
use crate::infra::repositories::{
    postgres_upcoming_event_repo::PostgresUpcomingEventRepo,
    postgres_past_event_repo::PostgresPastEventRepo,
    postgres_team_member_repo::PostgresTeamMemberRepo,
    postgres_site_content_repo::PostgresSiteContentRepo,
    sqlite_upcoming_event_repo::SqliteUpcomingEventRepo,
    sqlite_past_event_repo::SqlitePastEventRepo,
    sqlite_team_member_repo::SqliteTeamMemberRepo,
    sqlite_site_content_repo::SqliteSiteContentRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        assemble_state(
            config,
            Arc::new(PostgresUpcomingEventRepo::new(pool.clone())),
            Arc::new(PostgresPastEventRepo::new(pool.clone())),
            Arc::new(PostgresTeamMemberRepo::new(pool.clone())),
            Arc::new(PostgresSiteContentRepo::new(pool)),
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        assemble_state(
            config,
            Arc::new(SqliteUpcomingEventRepo::new(pool.clone())),
            Arc::new(SqlitePastEventRepo::new(pool.clone())),
            Arc::new(SqliteTeamMemberRepo::new(pool.clone())),
            Arc::new(SqliteSiteContentRepo::new(pool)),
        )
    }
}

fn assemble_state(
    config: &Config,
    upcoming_repo: Arc<dyn UpcomingEventRepository>,
    past_repo: Arc<dyn PastEventRepository>,
    team_repo: Arc<dyn TeamMemberRepository>,
    site_repo: Arc<dyn SiteContentRepository>,
) -> AppState {
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

    AppState {
        config: config.clone(),
        upcoming_repo,
        past_repo,
        team_repo,
        site_repo,
        resolver,
        archiver,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
