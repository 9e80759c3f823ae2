use actix_web::{get, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::handlers::matches::admin_handler;
use crate::models::matches::{CreateMatchRequest, RecordEventRequest};

/// Create a new match
#[post("/matches")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    admin_handler::create_match(request, repository).await
}

/// Get all matches (for the admin dashboard)
#[get("/matches")]
async fn list_matches(repository: web::Data<dyn MatchRepository>) -> Result<HttpResponse> {
    admin_handler::list_matches(repository).await
}

/// Start a match
#[post("/matches/{id}/start")]
async fn start_match(
    path: web::Path<Uuid>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    admin_handler::start_match(path, repository).await
}

/// Finish a match
#[post("/matches/{id}/finish")]
async fn finish_match(
    path: web::Path<Uuid>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    admin_handler::finish_match(path, repository).await
}

/// Record an in-play event (goal, card, foul)
#[post("/matches/{id}/events")]
async fn add_event(
    path: web::Path<Uuid>,
    request: web::Json<RecordEventRequest>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    admin_handler::add_event(path, request, repository).await
}
