use colored::Colorize;

use crate::domain::ticket::TicketRecord;

/// Styling for one run. Passed explicitly instead of toggling colors globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn resolved(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn unresolved(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn link(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render `KEY (state) summary url` on a single line.
pub fn describe(ticket: &TicketRecord, palette: Palette, include_url: bool) -> String {
    let state = ticket.state();
    let state = if ticket.is_resolved() {
        palette.resolved(&state)
    } else {
        palette.unresolved(&state)
    };

    let mut line = format!("{} ({}) {}", ticket.key, state, ticket.summary);
    if include_url {
        line.push(' ');
        line.push_str(&palette.link(&ticket.url));
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_progress() -> TicketRecord {
        TicketRecord {
            key: "ABC-123".to_string(),
            status: "In Progress".to_string(),
            resolution: String::new(),
            resolution_date: String::new(),
            summary: "Fix bug".to_string(),
            url: "https://jira.example.com/browse/ABC-123".to_string(),
        }
    }

    #[test]
    fn describes_open_ticket_with_link() {
        assert_eq!(
            describe(&in_progress(), Palette::new(false), true),
            "ABC-123 (In Progress) Fix bug https://jira.example.com/browse/ABC-123"
        );
    }

    #[test]
    fn omits_link_without_trailing_space() {
        let line = describe(&in_progress(), Palette::new(false), false);
        assert_eq!(line, "ABC-123 (In Progress) Fix bug");
        assert!(!line.contains("/browse/"));
    }

    #[test]
    fn describes_resolved_ticket() {
        let ticket = TicketRecord {
            key: "XYZ-9".to_string(),
            status: "Done".to_string(),
            resolution: "Fixed".to_string(),
            resolution_date: "2024-03-01T12:00:00.000+0000".to_string(),
            summary: "Write notes".to_string(),
            url: "https://jira.example.com/browse/XYZ-9".to_string(),
        };
        assert_eq!(
            describe(&ticket, Palette::new(false), false),
            "XYZ-9 (Done: Fixed) Write notes"
        );
    }

    #[test]
    fn trims_empty_summary() {
        let mut ticket = in_progress();
        ticket.summary = String::new();
        assert_eq!(
            describe(&ticket, Palette::new(false), false),
            "ABC-123 (In Progress)"
        );
    }

    #[test]
    fn colors_state_and_link_when_enabled() {
        colored::control::set_override(true);
        let line = describe(&in_progress(), Palette::new(true), true);
        assert!(line.starts_with("ABC-123 ("));
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("In Progress"));
        assert!(line.contains("https://jira.example.com/browse/ABC-123"));
    }
}
