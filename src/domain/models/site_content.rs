use serde::{Deserialize, Serialize};

/// Global site settings shown in the footer and nav (one record per
/// namespace). Every field is optional; an unreachable store resolves to
/// the default.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SiteSettings {
    pub groupme_link: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CoreGoal {
    pub title: String,
    pub items: Vec<String>,
}

/// Content for the mission ("learn more") page.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MissionPage {
    pub headline: Option<String>,
    pub mission_paragraph_1: Option<String>,
    pub mission_paragraph_2: Option<String>,
    pub core_goals: Vec<CoreGoal>,
}
