use crate::domain::models::{
    upcoming_event::UpcomingEvent, past_event::PastEvent, team_member::TeamMember,
    site_content::{SiteSettings, MissionPage},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UpcomingEventRepository: Send + Sync {
    async fn create(&self, event: &UpcomingEvent) -> Result<UpcomingEvent, AppError>;
    async fn find_by_id(&self, dataset: &str, id: &str) -> Result<Option<UpcomingEvent>, AppError>;
    async fn list(&self, dataset: &str) -> Result<Vec<UpcomingEvent>, AppError>;
    async fn delete(&self, dataset: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PastEventRepository: Send + Sync {
    async fn create(&self, event: &PastEvent) -> Result<PastEvent, AppError>;
    /// Insert unless a record with the same id already exists. Returns
    /// whether a row was written. This is the store's sole consistency
    /// guard against concurrent archive passes.
    async fn create_if_absent(&self, event: &PastEvent) -> Result<bool, AppError>;
    async fn list(&self, dataset: &str) -> Result<Vec<PastEvent>, AppError>;
}

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    async fn create(&self, member: &TeamMember) -> Result<TeamMember, AppError>;
    async fn list(&self, dataset: &str) -> Result<Vec<TeamMember>, AppError>;
}

#[async_trait]
pub trait SiteContentRepository: Send + Sync {
    async fn get_settings(&self, dataset: &str) -> Result<Option<SiteSettings>, AppError>;
    async fn upsert_settings(&self, dataset: &str, settings: &SiteSettings) -> Result<(), AppError>;
    async fn get_mission_page(&self, dataset: &str) -> Result<Option<MissionPage>, AppError>;
    async fn upsert_mission_page(&self, dataset: &str, page: &MissionPage) -> Result<(), AppError>;
}
