//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::health::{HealthReporter, SystemHealthReporter};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Read-only after startup: the configuration, the Tera template engine, and the
/// health reporter used by whichever routing layer owns the health path.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub health: Arc<dyn HealthReporter>,
}

impl AppState {
    /// Creates application state with a clock-backed health reporter.
    pub fn new(config: AppConfig, tera: Tera) -> Self {
        let reporter = SystemHealthReporter::new(config.app.mode.clone());
        Self::with_reporter(config, tera, Arc::new(reporter))
    }

    /// Creates application state with a caller-supplied health reporter.
    pub fn with_reporter(config: AppConfig, tera: Tera, health: Arc<dyn HealthReporter>) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            health,
        }
    }
}
