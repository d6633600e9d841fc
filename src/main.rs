//! heartbeat: a liveness endpoint scaffold.
//!
//! This is the application entry point. It initializes tracing, loads configuration
//! from a TOML file, resolves the deployment mode, sets up the Axum router, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heartbeat::config::{AppConfig, HealthBinding, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use heartbeat::http::start_server;
use heartbeat::templates::init_templates;
use heartbeat::{create_router, AppState};

/// heartbeat: health endpoint and demo page
#[derive(Parser, Debug)]
#[command(name = "heartbeat", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "heartbeat=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Deployment mode reported by the health endpoint (e.g., "production")
    #[arg(short, long, env = "APP_MODE")]
    mode: Option<String>,

    /// Routing layer that owns /api/health: "native" or "api-router"
    #[arg(short, long)]
    binding: Option<HealthBinding>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // A missing file is only tolerated at the default path
    let mut config =
        AppConfig::load_or_default(&args.config, args.config == DEFAULT_CONFIG_PATH)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Mode priority: CLI/env > config file
    if let Some(mode) = args.mode.filter(|m| !m.trim().is_empty()) {
        config.app.mode = Some(mode);
    }
    if let Some(binding) = args.binding {
        config.http.health_binding = binding;
    }

    tracing::info!(
        config = %args.config,
        mode = config.app.mode.as_deref().unwrap_or("unset"),
        binding = %config.http.health_binding,
        "Loaded configuration"
    );

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Create application state and router
    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
