//! heartbeat - liveness endpoint scaffold.
//!
//! Serves `/api/health` with a strict no-cache contract, plus a small demo page
//! with a client-side counter and a validated form.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
pub mod validation;

pub use config::AppConfig;
pub use error::AppError;
pub use health::{HealthReporter, HealthState, HealthStatus, SystemHealthReporter};
pub use routes::create_router;
pub use state::AppState;
