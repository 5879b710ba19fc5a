use std::sync::Arc;
use crate::domain::ports::{
    PastEventRepository, SiteContentRepository, TeamMemberRepository, UpcomingEventRepository,
};
use crate::domain::services::{archive::EventArchiver, content::ContentResolver};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upcoming_repo: Arc<dyn UpcomingEventRepository>,
    pub past_repo: Arc<dyn PastEventRepository>,
    pub team_repo: Arc<dyn TeamMemberRepository>,
    pub site_repo: Arc<dyn SiteContentRepository>,
    pub resolver: Arc<ContentResolver>,
    pub archiver: Arc<EventArchiver>,
}
