use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::domain::branch::ticket_key;
use crate::domain::description::{Palette, describe};
use crate::error::LookupError;
use crate::services::IssueTrackerService;

/// Turns one input line into one output line: the ticket description when the
/// lookup succeeds, otherwise the trimmed line itself.
#[derive(Clone)]
pub struct LineResolver {
    issue_tracker: Arc<dyn IssueTrackerService>,
    palette: Palette,
    include_links: bool,
}

impl LineResolver {
    pub fn new(
        issue_tracker: Arc<dyn IssueTrackerService>,
        palette: Palette,
        include_links: bool,
    ) -> Self {
        Self {
            issue_tracker,
            palette,
            include_links,
        }
    }

    pub async fn resolve(&self, line: &str) -> String {
        let line = line.trim();
        let Some(key) = ticket_key(line) else {
            trace!(line, "no ticket key");
            return line.to_string();
        };

        match self.issue_tracker.fetch_ticket(key).await {
            Ok(ticket) => describe(&ticket, self.palette, self.include_links),
            Err(LookupError::Status(status)) => {
                debug!(key, %status, "ticket lookup rejected");
                line.to_string()
            }
            Err(err) => {
                warn!(key, error = %err, "ticket lookup failed");
                line.to_string()
            }
        }
    }
}
