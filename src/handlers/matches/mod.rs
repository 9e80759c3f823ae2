pub mod admin_handler;
pub mod match_handler;

use actix_web::HttpResponse;
use serde_json::json;

use crate::errors::MatchError;

/// Map a service error onto the HTTP response the client sees.
pub(crate) fn error_response(context: &str, error: MatchError) -> HttpResponse {
    match error {
        MatchError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        MatchError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "Match not found" }))
        }
        MatchError::InvalidTransition { .. } | MatchError::InvalidState(_) => {
            HttpResponse::BadRequest().json(json!({ "error": error.to_string() }))
        }
        MatchError::Store(store_error) => {
            tracing::error!("{}: {}", context, store_error);
            HttpResponse::InternalServerError().json(json!({
                "error": context,
                "details": store_error.to_string()
            }))
        }
    }
}
