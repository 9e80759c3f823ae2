use actix_web::{get, web, HttpResponse, Result};
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::handlers::matches::match_handler;

/// Get all matches, newest first
#[get("")]
async fn get_all_matches(repository: web::Data<dyn MatchRepository>) -> Result<HttpResponse> {
    match_handler::get_all_matches(repository).await
}

/// Get currently live matches
#[get("/live")]
async fn get_live_matches(repository: web::Data<dyn MatchRepository>) -> Result<HttpResponse> {
    match_handler::get_live_matches(repository).await
}

/// Get a single match
#[get("/{id}")]
async fn get_match(
    path: web::Path<Uuid>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    match_handler::get_match(path, repository).await
}
