use async_trait::async_trait;

use crate::domain::ticket::TicketRecord;
use crate::error::LookupError;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn fetch_ticket(&self, key: &str) -> Result<TicketRecord, LookupError>;
}
