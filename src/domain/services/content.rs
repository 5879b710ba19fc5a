use std::sync::Arc;
use chrono::Utc;
use tracing::warn;

use crate::domain::models::{
    site_content::{MissionPage, SiteSettings},
    team_member::TeamMember,
    upcoming_event::UpcomingEvent,
};
use crate::domain::ports::{SiteContentRepository, TeamMemberRepository, UpcomingEventRepository};

/// Read-side resolvers for the site pages. Every method is total: a missing
/// namespace or a store failure resolves to the empty/default value, never
/// an error.
pub struct ContentResolver {
    namespace: Option<String>,
    upcoming_repo: Arc<dyn UpcomingEventRepository>,
    team_repo: Arc<dyn TeamMemberRepository>,
    site_repo: Arc<dyn SiteContentRepository>,
}

impl ContentResolver {
    pub fn new(
        namespace: Option<String>,
        upcoming_repo: Arc<dyn UpcomingEventRepository>,
        team_repo: Arc<dyn TeamMemberRepository>,
        site_repo: Arc<dyn SiteContentRepository>,
    ) -> Self {
        Self {
            namespace,
            upcoming_repo,
            team_repo,
            site_repo,
        }
    }

    pub async fn resolve_upcoming_events(&self) -> Vec<UpcomingEvent> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        self.resolve_upcoming_events_at(&today).await
    }

    /// Events dated today or later. Events without a date never show on the
    /// calendar.
    pub async fn resolve_upcoming_events_at(&self, today: &str) -> Vec<UpcomingEvent> {
        let Some(dataset) = self.namespace.as_deref() else {
            return Vec::new();
        };
        match self.upcoming_repo.list(dataset).await {
            Ok(events) => events
                .into_iter()
                .filter(|e| e.date.as_deref().is_some_and(|d| d >= today))
                .collect(),
            Err(e) => {
                warn!("Failed to fetch upcoming events: {:?}", e);
                Vec::new()
            }
        }
    }

    pub async fn resolve_team_members(&self) -> Vec<TeamMember> {
        let Some(dataset) = self.namespace.as_deref() else {
            return Vec::new();
        };
        match self.team_repo.list(dataset).await {
            Ok(members) => members,
            Err(e) => {
                warn!("Failed to fetch team members: {:?}", e);
                Vec::new()
            }
        }
    }

    pub async fn resolve_site_settings(&self) -> SiteSettings {
        let Some(dataset) = self.namespace.as_deref() else {
            return SiteSettings::default();
        };
        match self.site_repo.get_settings(dataset).await {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to fetch site settings: {:?}", e);
                SiteSettings::default()
            }
        }
    }

    pub async fn resolve_mission_page(&self) -> MissionPage {
        let Some(dataset) = self.namespace.as_deref() else {
            return MissionPage::default();
        };
        match self.site_repo.get_mission_page(dataset).await {
            Ok(page) => page.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to fetch mission page: {:?}", e);
                MissionPage::default()
            }
        }
    }
}
