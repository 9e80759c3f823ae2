use actix::{Actor, ActorContext, AsyncContext, Handler, StreamHandler};
use actix_web_actors::ws;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing;
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::routes::feed::messages::{FeedFrame, FeedPush, FeedSnapshot};

// How often the feed re-queries the store and pushes a snapshot
const POLL_INTERVAL: Duration = Duration::from_secs(3);
// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(10);
// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// What a subscriber is watching.
#[derive(Debug, Clone, Copy)]
pub enum FeedTarget {
    /// Every currently live match, most recently started first.
    AllLive,
    /// One match by id.
    Match(Uuid),
}

/// One WebSocket subscription to the live feed.
///
/// The actor owns its poll timer: `run_interval` handles die with the
/// actor context, so no tick can fire once the client has disconnected.
/// A failed query is pushed as an `error` frame and polling continues.
pub struct LiveFeedSession {
    target: FeedTarget,
    repository: Arc<dyn MatchRepository>,
    heartbeat: Instant,
}

impl LiveFeedSession {
    pub fn new(target: FeedTarget, repository: Arc<dyn MatchRepository>) -> Self {
        Self {
            target,
            repository,
            heartbeat: Instant::now(),
        }
    }

    fn heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.heartbeat) > CLIENT_TIMEOUT {
                tracing::warn!("Live feed client missed heartbeat, disconnecting");
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }

    /// Query the watched projection off-actor and mail the frame back.
    /// If the actor has stopped by the time the query finishes, the
    /// message is dropped on the floor and nothing is emitted.
    fn push_snapshot(&self, ctx: &mut ws::WebsocketContext<Self>, initial: bool) {
        let repository = Arc::clone(&self.repository);
        let target = self.target;
        let addr = ctx.address();
        actix::spawn(async move {
            let frame = query_snapshot(repository, target, initial).await;
            addr.do_send(FeedPush(frame));
        });
    }
}

async fn query_snapshot(
    repository: Arc<dyn MatchRepository>,
    target: FeedTarget,
    initial: bool,
) -> FeedFrame {
    let snapshot = match target {
        FeedTarget::AllLive => match repository.list_live().await {
            Ok(matches) => FeedSnapshot::Matches { matches },
            Err(e) => {
                tracing::error!("Live feed failed to fetch live matches: {}", e);
                return FeedFrame::Error {
                    message: "Failed to fetch matches".to_string(),
                };
            }
        },
        FeedTarget::Match(id) => match repository.find_by_id(id).await {
            Ok(Some(match_)) => FeedSnapshot::Single { match_ },
            Ok(None) => {
                return FeedFrame::Error {
                    message: "match not found".to_string(),
                }
            }
            Err(e) => {
                tracing::error!("Live feed failed to fetch match {}: {}", id, e);
                return FeedFrame::Error {
                    message: "Failed to fetch match".to_string(),
                };
            }
        },
    };

    if initial {
        FeedFrame::Initial(snapshot)
    } else {
        FeedFrame::Update(snapshot)
    }
}

impl Actor for LiveFeedSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!("Live feed subscription opened: {:?}", self.target);

        self.heartbeat(ctx);

        // First frame goes out immediately, then one per tick
        self.push_snapshot(ctx, true);
        ctx.run_interval(POLL_INTERVAL, |act, ctx| {
            act.push_snapshot(ctx, false);
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("Live feed subscription closed: {:?}", self.target);
    }
}

impl Handler<FeedPush> for LiveFeedSession {
    type Result = ();

    fn handle(&mut self, msg: FeedPush, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg.0) {
            Ok(text) => ctx.text(text),
            Err(e) => tracing::error!("Failed to serialize feed frame: {}", e),
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for LiveFeedSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.heartbeat = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(_)) | Ok(ws::Message::Binary(_)) => {
                // The feed is one-way; client frames are ignored
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => ctx.stop(),
        }
    }
}
