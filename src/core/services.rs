//! Unified service container
//!
//! Provides shared access to all core services.

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::Config;
use crate::core::search::SearchService;
use crate::core::source::{DocumentSource, JsonFileSource};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Search service for relevance queries
    pub search: Arc<SearchService>,

    /// Document source backing the search service
    pub source: Arc<dyn DocumentSource>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Documents are read from `source.documents_path`; time comes
    /// from the system clock.
    pub fn new(config: Config) -> Self {
        let source: Arc<dyn DocumentSource> =
            Arc::new(JsonFileSource::new(config.source.documents_path.clone()));
        Self::with_source(config, source, Arc::new(SystemClock))
    }

    /// Create services over an explicit source and clock
    pub fn with_source(
        config: Config,
        source: Arc<dyn DocumentSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let search = Arc::new(SearchService::new(
            Arc::clone(&source),
            clock,
            config.search.clone(),
        ));

        Self {
            search,
            source,
            config: Arc::new(config),
        }
    }
}
