use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::handlers::matches::error_response;
use crate::models::matches::{CreateMatchRequest, RecordEventRequest};
use crate::services::{EventRecorder, MatchLifecycle};

/// Create a new match in `scheduled` state.
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    let lifecycle = MatchLifecycle::new(repository.into_inner());

    match lifecycle
        .create(&request.home_team, &request.away_team)
        .await
    {
        Ok(match_) => Ok(HttpResponse::Created().json(json!({
            "message": "Match created successfully",
            "match": match_
        }))),
        Err(e) => Ok(error_response("Failed to create match", e)),
    }
}

/// Transition a scheduled match to live.
pub async fn start_match(
    path: web::Path<Uuid>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    let lifecycle = MatchLifecycle::new(repository.into_inner());

    match lifecycle.start(path.into_inner()).await {
        Ok(match_) => Ok(HttpResponse::Ok().json(json!({
            "message": "Match started successfully",
            "match": match_
        }))),
        Err(e) => Ok(error_response("Failed to start match", e)),
    }
}

/// Finish a match. Works from any prior state.
pub async fn finish_match(
    path: web::Path<Uuid>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    let lifecycle = MatchLifecycle::new(repository.into_inner());

    match lifecycle.finish(path.into_inner()).await {
        Ok(match_) => Ok(HttpResponse::Ok().json(json!({
            "message": "Match finished successfully",
            "match": match_
        }))),
        Err(e) => Ok(error_response("Failed to finish match", e)),
    }
}

/// Record an in-play event (goal, card, foul) on a live match.
pub async fn add_event(
    path: web::Path<Uuid>,
    request: web::Json<RecordEventRequest>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    let recorder = EventRecorder::new(repository.into_inner());

    match recorder
        .record_event(path.into_inner(), request.into_inner())
        .await
    {
        Ok(match_) => Ok(HttpResponse::Ok().json(json!({
            "message": "Event added successfully",
            "match": match_
        }))),
        Err(e) => Ok(error_response("Failed to add event", e)),
    }
}

/// All matches, newest first, for the admin dashboard.
pub async fn list_matches(repository: web::Data<dyn MatchRepository>) -> Result<HttpResponse> {
    match repository.list_all().await {
        Ok(matches) => Ok(HttpResponse::Ok().json(matches)),
        Err(e) => Ok(error_response("Failed to fetch matches", e.into())),
    }
}
