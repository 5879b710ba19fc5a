use serde::Deserialize;

use crate::domain::models::site_content::CoreGoal;

#[derive(Deserialize)]
pub struct CreateUpcomingEventRequest {
    pub title: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub rsvp_link: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePastEventRequest {
    pub title: String,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub source_event_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub image_url: Option<String>,
    pub role: Option<String>,
    pub year: Option<String>,
    pub blurb: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateSiteSettingsRequest {
    pub groupme_link: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateMissionPageRequest {
    pub headline: Option<String>,
    pub mission_paragraph_1: Option<String>,
    pub mission_paragraph_2: Option<String>,
    #[serde(default)]
    pub core_goals: Vec<CoreGoal>,
}
