use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::db::MatchRepository;
use crate::errors::MatchError;
use crate::models::matches::{Match, MatchStatus};

/// State machine for the match lifecycle: `scheduled -> live -> finished`.
///
/// Every transition is a whole-aggregate read-modify-write against the
/// repository, so `status` and `start_time`/`end_time` can never drift
/// apart.
pub struct MatchLifecycle {
    repository: Arc<dyn MatchRepository>,
}

impl MatchLifecycle {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    /// Create a new match in `scheduled` state with zero scores and no
    /// events. Team names must be non-empty after trimming.
    pub async fn create(&self, home_team: &str, away_team: &str) -> Result<Match, MatchError> {
        let home_team = home_team.trim();
        let away_team = away_team.trim();
        if home_team.is_empty() || away_team.is_empty() {
            return Err(MatchError::Validation(
                "Both home_team and away_team are required".to_string(),
            ));
        }

        let match_ = Match::new(home_team.to_string(), away_team.to_string());
        let saved = self.repository.insert(&match_).await?;

        info!("New match created: {} vs {}", saved.home_team, saved.away_team);
        Ok(saved)
    }

    /// Move a scheduled match to `live` and stamp `start_time`.
    pub async fn start(&self, id: uuid::Uuid) -> Result<Match, MatchError> {
        let mut match_ = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(MatchError::NotFound)?;

        match match_.status {
            MatchStatus::Live | MatchStatus::Finished => {
                return Err(MatchError::InvalidTransition {
                    from: match_.status,
                    action: "start",
                });
            }
            MatchStatus::Scheduled => {}
        }

        match_.status = MatchStatus::Live;
        match_.start_time = Some(Utc::now());
        let saved = self
            .repository
            .update(&match_)
            .await
            .map_err(MatchError::from_update)?;

        info!("Match started: {} vs {}", saved.home_team, saved.away_team);
        Ok(saved)
    }

    /// Move a match to `finished` and stamp `end_time`. Deliberately
    /// unguarded: finishing works from any prior state, including straight
    /// from `scheduled`.
    pub async fn finish(&self, id: uuid::Uuid) -> Result<Match, MatchError> {
        let mut match_ = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(MatchError::NotFound)?;

        match_.status = MatchStatus::Finished;
        match_.end_time = Some(Utc::now());
        let saved = self
            .repository
            .update(&match_)
            .await
            .map_err(MatchError::from_update)?;

        info!("Match finished: {} vs {}", saved.home_team, saved.away_team);
        Ok(saved)
    }
}
