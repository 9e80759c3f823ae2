use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::errors::StoreError;
use crate::models::matches::{Match, MatchStatus};

/// In-memory match store. Backs the integration test harness and local
/// runs without Postgres; write methods take the lock once, so each
/// insert/update is atomic to readers just like a single-row UPDATE.
#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: RwLock<HashMap<Uuid, Match>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn insert(&self, match_: &Match) -> Result<Match, StoreError> {
        let mut stored = match_.clone();
        let now = Utc::now();
        stored.created_at = now;
        stored.updated_at = now;
        self.matches.write().await.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Match>, StoreError> {
        Ok(self.matches.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Match>, StoreError> {
        let mut all: Vec<Match> = self.matches.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn list_live(&self) -> Result<Vec<Match>, StoreError> {
        let mut live: Vec<Match> = self
            .matches
            .read()
            .await
            .values()
            .filter(|m| m.status == MatchStatus::Live)
            .cloned()
            .collect();
        live.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(live)
    }

    async fn update(&self, match_: &Match) -> Result<Match, StoreError> {
        let mut guard = self.matches.write().await;
        let entry = guard
            .get_mut(&match_.id)
            .ok_or_else(|| StoreError::Database(sqlx::Error::RowNotFound))?;
        let mut updated = match_.clone();
        updated.created_at = entry.created_at;
        updated.updated_at = Utc::now();
        *entry = updated.clone();
        Ok(updated)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_live_filters_and_sorts_by_start_time_desc() {
        let repo = InMemoryMatchRepository::new();

        let mut early = Match::new("A".into(), "B".into());
        early.status = MatchStatus::Live;
        early.start_time = Some(Utc::now() - chrono::Duration::minutes(30));

        let mut late = Match::new("C".into(), "D".into());
        late.status = MatchStatus::Live;
        late.start_time = Some(Utc::now());

        let scheduled = Match::new("E".into(), "F".into());

        repo.insert(&early).await.unwrap();
        repo.insert(&late).await.unwrap();
        repo.insert(&scheduled).await.unwrap();

        let live = repo.list_live().await.unwrap();
        assert_eq!(live.len(), 2);
        assert_eq!(live[0].id, late.id);
        assert_eq!(live[1].id, early.id);
    }

    #[tokio::test]
    async fn update_on_missing_match_fails() {
        let repo = InMemoryMatchRepository::new();
        let ghost = Match::new("A".into(), "B".into());
        assert!(repo.update(&ghost).await.is_err());
    }
}
