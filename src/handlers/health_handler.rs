use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::db::MatchRepository;

/// Health probe: reports whether the match store is reachable.
pub async fn health_check(repository: web::Data<dyn MatchRepository>) -> impl Responder {
    let database = match repository.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("Health check failed to reach the store: {}", e);
            "disconnected"
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "OK",
        "database": database,
        "timestamp": Utc::now().to_rfc3339()
    }))
}
