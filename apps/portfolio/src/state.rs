use std::sync::Arc;

use crate::config::Config;
use crate::data::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable data source. Default: FsPortfolioStore over `config.data_dir`.
    pub store: Arc<dyn PortfolioStore>,
}
