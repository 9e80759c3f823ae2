use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::errors::MatchError;
use crate::handlers::matches::error_response;

/// All matches, newest first.
pub async fn get_all_matches(repository: web::Data<dyn MatchRepository>) -> Result<HttpResponse> {
    match repository.list_all().await {
        Ok(matches) => Ok(HttpResponse::Ok().json(matches)),
        Err(e) => Ok(error_response("Failed to fetch matches", e.into())),
    }
}

/// Currently live matches, most recently started first.
pub async fn get_live_matches(repository: web::Data<dyn MatchRepository>) -> Result<HttpResponse> {
    match repository.list_live().await {
        Ok(matches) => Ok(HttpResponse::Ok().json(matches)),
        Err(e) => Ok(error_response("Failed to fetch live matches", e.into())),
    }
}

/// One match by id.
pub async fn get_match(
    path: web::Path<Uuid>,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse> {
    match repository.find_by_id(path.into_inner()).await {
        Ok(Some(match_)) => Ok(HttpResponse::Ok().json(match_)),
        Ok(None) => Ok(error_response("Failed to fetch match", MatchError::NotFound)),
        Err(e) => Ok(error_response("Failed to fetch match", e.into())),
    }
}
