use actix;
use serde::Serialize;

use crate::models::matches::Match;

/// Frame pushed to a feed subscriber. The first frame after connecting is
/// `initial`; every poll tick after that is `update` (full snapshot, no
/// diffing) or `error` when the query fails.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedFrame {
    Initial(FeedSnapshot),
    Update(FeedSnapshot),
    Error { message: String },
}

/// Snapshot payload: the full live list, or the single watched match.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FeedSnapshot {
    Matches { matches: Vec<Match> },
    Single {
        #[serde(rename = "match")]
        match_: Match,
    },
}

// Result of a poll, sent from the query task back to the session actor
#[derive(actix::Message)]
#[rtype(result = "()")]
pub struct FeedPush(pub FeedFrame);
