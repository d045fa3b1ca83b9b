use std::sync::Arc;

use crate::config::Config;
use crate::matching::matcher::SubstringMatcher;
use crate::matching::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup from the configured weights. Default matcher: SubstringMatcher.
    pub engine: Arc<MatchEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = MatchEngine::default()
            .with_weights(config.weights)
            .with_matcher(Arc::new(SubstringMatcher));
        Self {
            config,
            engine: Arc::new(engine),
        }
    }
}
