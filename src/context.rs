use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::IssueTrackerService;
use crate::workflow::dispatch::Dispatcher;
use crate::workflow::resolve::LineResolver;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
}

impl AppContext {
    pub fn new(config: AppConfig, issue_tracker: Arc<dyn IssueTrackerService>) -> Self {
        Self {
            config,
            issue_tracker,
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        let resolver = LineResolver::new(
            Arc::clone(&self.issue_tracker),
            self.config.palette,
            self.config.include_links,
        );
        Dispatcher::new(resolver, self.config.max_in_flight)
    }
}
