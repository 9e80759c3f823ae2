mod messages;
mod session;

use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::MatchRepository;

pub use messages::{FeedFrame, FeedSnapshot};
pub use session::{FeedTarget, LiveFeedSession};

/// Subscribe to snapshots of every currently live match.
pub async fn live_feed_route(
    req: HttpRequest,
    stream: web::Payload,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse, Error> {
    ws::start(
        LiveFeedSession::new(FeedTarget::AllLive, Arc::clone(&repository.into_inner())),
        &req,
        stream,
    )
}

/// Subscribe to snapshots of one match.
pub async fn match_feed_route(
    req: HttpRequest,
    path: web::Path<Uuid>,
    stream: web::Payload,
    repository: web::Data<dyn MatchRepository>,
) -> Result<HttpResponse, Error> {
    ws::start(
        LiveFeedSession::new(
            FeedTarget::Match(path.into_inner()),
            Arc::clone(&repository.into_inner()),
        ),
        &req,
        stream,
    )
}
