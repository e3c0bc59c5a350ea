/// A ticket as returned by one lookup. Built fresh per request and consumed by
/// the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub key: String,
    pub status: String,
    /// Empty while the ticket is unresolved.
    pub resolution: String,
    /// Empty while the ticket is unresolved.
    pub resolution_date: String,
    pub summary: String,
    pub url: String,
}

impl TicketRecord {
    pub fn is_resolved(&self) -> bool {
        !self.resolution_date.is_empty()
    }

    /// Status text shown in the description, e.g. `Done: Fixed`.
    pub fn state(&self) -> String {
        if self.is_resolved() {
            format!("{}: {}", self.status, self.resolution)
        } else {
            self.status.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(resolution: &str, resolution_date: &str) -> TicketRecord {
        TicketRecord {
            key: "XYZ-9".to_string(),
            status: "Done".to_string(),
            resolution: resolution.to_string(),
            resolution_date: resolution_date.to_string(),
            summary: "notes".to_string(),
            url: "https://jira.example.com/browse/XYZ-9".to_string(),
        }
    }

    #[test]
    fn appends_resolution_when_resolved() {
        let ticket = record("Fixed", "2024-01-02T10:00:00.000+0000");
        assert!(ticket.is_resolved());
        assert_eq!(ticket.state(), "Done: Fixed");
    }

    #[test]
    fn ignores_resolution_name_without_date() {
        let ticket = record("Fixed", "");
        assert!(!ticket.is_resolved());
        assert_eq!(ticket.state(), "Done");
    }
}
