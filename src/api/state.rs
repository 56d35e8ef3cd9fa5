//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::analysis::NightAnalyzer;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Produces night analyses
    pub analyzer: Arc<dyn NightAnalyzer>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(analyzer: Arc<dyn NightAnalyzer>) -> Self {
        Self {
            analyzer,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisClient, ClientConfig};

    #[test]
    fn test_state_holds_only_the_analyzer() {
        let client = AnalysisClient::new(ClientConfig::default()).unwrap();
        let state = AppState::new(Arc::new(client));

        let shared = state.clone();
        assert!(Arc::ptr_eq(&state.analyzer, &shared.analyzer));
        assert_eq!(state.uptime_seconds(), 0);
    }
}
