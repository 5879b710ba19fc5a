use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub write_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            project_id: env::var("CONTENT_PROJECT_ID").ok().filter(|v| !v.is_empty()),
            dataset: env::var("CONTENT_DATASET").ok().filter(|v| !v.is_empty()),
            write_token: env::var("CONTENT_WRITE_TOKEN").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Both identifiers are required to address a content namespace. When
    /// either is missing, every read resolves to its default instead of
    /// touching the store.
    pub fn namespace(&self) -> Option<String> {
        match (&self.project_id, &self.dataset) {
            (Some(project), Some(dataset)) => Some(format!("{}-{}", project, dataset)),
            _ => None,
        }
    }

    pub fn can_write(&self) -> bool {
        self.namespace().is_some() && self.write_token.is_some()
    }
}
