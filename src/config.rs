use crate::domain::description::Palette;
use crate::error::{AppError, AppResult};

pub const DEFAULT_JIRA_URL: &str = "https://jira.mongodb.org/";

/// Connection details for the Jira server, shared read-only by every lookup.
#[derive(Debug, Clone)]
pub struct TrackerSettings {
    pub base_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl TrackerSettings {
    pub fn new(
        base_url: &str,
        user: Option<String>,
        password: Option<String>,
    ) -> AppResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AppError::Configuration(
                "Jira base URL must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            user,
            password,
        })
    }

    /// Credentials are only used when both halves are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                Some((user, password))
            }
            _ => None,
        }
    }

    pub fn issue_endpoint(&self, key: &str) -> String {
        format!("{}/rest/api/latest/issue/{}", self.base_url, key)
    }

    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tracker: TrackerSettings,
    pub palette: Palette,
    pub include_links: bool,
    pub max_in_flight: Option<usize>,
}
