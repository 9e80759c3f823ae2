use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;

use football_tracker_backend::db::{InMemoryMatchRepository, MatchRepository};
use football_tracker_backend::run;
use football_tracker_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub ws_address: String,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let ws_address = format!("ws://127.0.0.1:{}", port);

    let repository: Arc<dyn MatchRepository> = Arc::new(InMemoryMatchRepository::new());

    let server = run(listener, repository, "http://localhost:3000".to_string())
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        ws_address,
    }
}

/// Create a match through the admin API and return its JSON representation.
pub async fn create_match(
    client: &Client,
    address: &str,
    home_team: &str,
    away_team: &str,
) -> serde_json::Value {
    let response = client
        .post(format!("{}/api/admin/matches", address))
        .json(&json!({ "home_team": home_team, "away_team": away_team }))
        .send()
        .await
        .expect("Failed to create match");
    assert_eq!(response.status(), 201, "Match creation should succeed");

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse create response");
    body["match"].clone()
}

pub async fn start_match(client: &Client, address: &str, id: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/admin/matches/{}/start", address, id))
        .send()
        .await
        .expect("Failed to send start request")
}

pub async fn finish_match(client: &Client, address: &str, id: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/admin/matches/{}/finish", address, id))
        .send()
        .await
        .expect("Failed to send finish request")
}

pub async fn add_event(
    client: &Client,
    address: &str,
    id: &str,
    event: serde_json::Value,
) -> reqwest::Response {
    client
        .post(format!("{}/api/admin/matches/{}/events", address, id))
        .json(&event)
        .send()
        .await
        .expect("Failed to send event request")
}
