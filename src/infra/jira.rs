use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::config::TrackerSettings;
use crate::domain::ticket::TicketRecord;
use crate::error::LookupError;
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    settings: TrackerSettings,
}

impl JiraClient {
    pub fn new(settings: TrackerSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    fn auth_header(user: &str, password: &str) -> String {
        let credentials = format!("{user}:{password}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn record_from(&self, payload: JiraIssueResponse) -> TicketRecord {
        let fields = payload.fields;
        let url = self.settings.browse_url(&payload.key);
        TicketRecord {
            key: payload.key,
            status: fields.status.name,
            resolution: fields.resolution.map(|r| r.name).unwrap_or_default(),
            resolution_date: fields.resolutiondate.unwrap_or_default(),
            summary: fields.summary,
            url,
        }
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_ticket(&self, key: &str) -> Result<TicketRecord, LookupError> {
        let mut request = self
            .http
            .get(self.settings.issue_endpoint(key))
            .header(ACCEPT, "application/json");
        if let Some((user, password)) = self.settings.credentials() {
            request = request.header(AUTHORIZATION, Self::auth_header(user, password));
        }

        let response = request.send().await.map_err(LookupError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status(status));
        }

        let body = response.bytes().await.map_err(LookupError::Body)?;
        let payload: JiraIssueResponse = serde_json::from_slice(&body)?;

        Ok(self.record_from(payload))
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    key: String,
    fields: JiraIssueFields,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    status: JiraNamed,
    summary: String,
    #[serde(default)]
    resolution: Option<JiraNamed>,
    #[serde(default)]
    resolutiondate: Option<String>,
}

#[derive(Deserialize)]
struct JiraNamed {
    #[serde(default)]
    name: String,
}
