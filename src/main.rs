use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use football_tracker_backend::config::settings::get_config;
use football_tracker_backend::db::{MatchRepository, PgMatchRepository};
use football_tracker_backend::run;
use football_tracker_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "football-tracker-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // Only try to establish a connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(32)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(config.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    let repository: Arc<dyn MatchRepository> =
        Arc::new(PgMatchRepository::new(connection_pool));

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server listening on {}", address);

    run(listener, repository, config.application.client_url)?.await
}
