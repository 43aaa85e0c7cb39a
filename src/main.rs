use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;
use vigil_algo::config::{LoggingSettings, Settings};
use vigil_algo::core::Ranker;
use vigil_algo::routes::{self, AppState};
use vigil_algo::services::{Fleet, HttpMetricsSource, MetricsSource, StaticMetricsSource};

/// `LOG_LEVEL` and `LOG_FORMAT` take precedence over the `[logging]` section
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn build_metrics_source(settings: &Settings, fleet: &Fleet) -> std::io::Result<Arc<dyn MetricsSource>> {
    match settings.metrics.endpoint.as_deref() {
        Some(endpoint) if !endpoint.is_empty() => {
            let timeout = Duration::from_secs(settings.metrics.timeout_secs.unwrap_or(10));
            let source = HttpMetricsSource::new(endpoint.to_string(), timeout)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            info!("Metrics source: {} (timeout {:?})", source.url(), timeout);
            Ok(Arc::new(source))
        }
        _ => {
            // Serve the first driver's readings so the live chart has data
            let samples = fleet
                .drivers
                .first()
                .map(|d| d.alertness_data.clone())
                .unwrap_or_default();
            warn!("No metrics endpoint configured, serving {} bundled samples", samples.len());
            Ok(Arc::new(StaticMetricsSource::new(samples)))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();

    init_logging(&logging);

    info!("Starting Vigil Algo dashboard service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let fleet = Fleet::load(settings.fleet.dataset_path.as_deref()).map_err(|e| {
        error!("Failed to load fleet dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!(
        "Fleet loaded: {} drivers, {} history records, {} sleep profiles",
        fleet.drivers.len(),
        fleet.history.len(),
        fleet.sleep_profiles.len()
    );

    let metrics = build_metrics_source(&settings, &fleet)?;

    let ranker = Ranker::new(settings.suggestions.default_limit);

    info!(
        "Ranker initialized (default limit: {}, max limit: {})",
        settings.suggestions.default_limit, settings.suggestions.max_limit
    );

    let app_state = AppState {
        fleet: Arc::new(fleet),
        metrics,
        ranker,
        max_limit: settings.suggestions.max_limit,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
