use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use kindred::config::{LoggingSettings, Settings};
use kindred::routes::{self, AppState};
use kindred::{Matcher, ProfileDirectory};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber; `RUST_LOG` overrides the configured level
///
/// `format` selects "json" or "pretty" output, anything else gets the
/// plain text formatter.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::other(format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return Err(startup_error("Failed to load configuration", e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Kindred matching service...");

    let directory = match settings.directory.path.as_deref() {
        Some(path) => {
            info!("Loading profile directory from {}", path);
            ProfileDirectory::load(path).await
        }
        None => {
            info!("No directory path configured, using bundled profiles");
            ProfileDirectory::embedded()
        }
    }
    .map_err(|e| startup_error("Failed to load profile directory", e))?;

    let directory = Arc::new(directory);

    info!("Profile directory loaded ({} profiles)", directory.len());

    let app_state = AppState {
        matcher: Matcher::from_shared(directory),
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
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
