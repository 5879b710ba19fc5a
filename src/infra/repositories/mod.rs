pub mod sqlite_upcoming_event_repo;
pub mod sqlite_past_event_repo;
pub mod sqlite_team_member_repo;
pub mod sqlite_site_content_repo;
pub mod postgres_upcoming_event_repo;
pub mod postgres_past_event_repo;
pub mod postgres_team_member_repo;
pub mod postgres_site_content_repo;
