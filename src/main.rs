use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use talent_rank::config::{LoggingSettings, Settings};
use talent_rank::core::{Ranker, ResolvedWeights};
use talent_rank::routes::{self, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting Talent Rank service...");

    let weights = ResolvedWeights::from(settings.ranking.weights);
    if let Some(warning) = weights.sum_warning() {
        warn!("Configured default {}", warning);
    }

    let ranker = Ranker::new(weights);

    info!("Ranker initialized with weights: {:?}", weights);

    let app_state = AppState::new(ranker, settings.ranking.max_candidates);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let payload_limit = settings.server.max_payload_bytes;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config(payload_limit))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))
    .map_err(|e| {
        error!("Failed to bind HTTP server: {}", e);
        e
    })?
    .run()
    .await
}
