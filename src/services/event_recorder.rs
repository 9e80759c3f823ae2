use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::db::MatchRepository;
use crate::errors::MatchError;
use crate::models::matches::{EventType, Match, MatchEvent, RecordEventRequest, TeamSide};

/// Validates and appends in-play events to a live match.
///
/// A goal event and its score increment land in the same aggregate write;
/// the score is never touched without appending the event, and never the
/// reverse.
pub struct EventRecorder {
    repository: Arc<dyn MatchRepository>,
}

impl EventRecorder {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn record_event(
        &self,
        id: uuid::Uuid,
        request: RecordEventRequest,
    ) -> Result<Match, MatchError> {
        let mut match_ = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(MatchError::NotFound)?;

        if !match_.is_live() {
            return Err(MatchError::InvalidState(match_.status));
        }

        // Reject unrecognized enum values before any event is constructed.
        let event_type: EventType = request
            .event_type
            .parse()
            .map_err(MatchError::Validation)?;
        let team: TeamSide = request.team.parse().map_err(MatchError::Validation)?;

        let player = request.player.trim();
        if player.is_empty() {
            return Err(MatchError::Validation("player is required".to_string()));
        }

        let description = match request.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => format!("{} for {} team", event_type, team),
        };

        let event = MatchEvent {
            event_type,
            team,
            player: player.to_string(),
            minute: request.minute,
            description,
            created_at: Utc::now(),
        };

        match_.events.push(event);
        if event_type == EventType::Goal {
            match team {
                TeamSide::Home => match_.home_score += 1,
                TeamSide::Away => match_.away_score += 1,
            }
        }

        let saved = self
            .repository
            .update(&match_)
            .await
            .map_err(MatchError::from_update)?;

        info!(
            "Event added: {} for {} team in {} vs {}",
            event_type, team, saved.home_team, saved.away_team
        );
        Ok(saved)
    }
}
