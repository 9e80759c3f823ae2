use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::MatchRepository;
use crate::errors::StoreError;
use crate::models::matches::{Match, MatchEvent, MatchStatus};

const MATCH_COLUMNS: &str = "id, home_team, away_team, home_score, away_score, \
     status, events, start_time, end_time, created_at, updated_at";

/// Postgres-backed match store. One row per match; the event list is an
/// embedded JSONB array, so a single UPDATE carries the append and the
/// score change together.
#[derive(Debug, Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_match(row: &PgRow) -> Result<Match, StoreError> {
    let status: String = row.get("status");
    let status: MatchStatus = status.parse().map_err(StoreError::Corrupted)?;
    let events: serde_json::Value = row.get("events");
    let events: Vec<MatchEvent> = serde_json::from_value(events)?;

    Ok(Match {
        id: row.get("id"),
        home_team: row.get("home_team"),
        away_team: row.get("away_team"),
        home_score: row.get("home_score"),
        away_score: row.get("away_score"),
        status,
        events,
        start_time: row.get::<Option<DateTime<Utc>>, _>("start_time"),
        end_time: row.get::<Option<DateTime<Utc>>, _>("end_time"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    async fn insert(&self, match_: &Match) -> Result<Match, StoreError> {
        let query = format!(
            "INSERT INTO matches (
                id, home_team, away_team, home_score, away_score,
                status, events, start_time, end_time, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING {MATCH_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(match_.id)
            .bind(&match_.home_team)
            .bind(&match_.away_team)
            .bind(match_.home_score)
            .bind(match_.away_score)
            .bind(match_.status.as_str())
            .bind(serde_json::to_value(&match_.events)?)
            .bind(match_.start_time)
            .bind(match_.end_time)
            .fetch_one(&self.pool)
            .await?;

        row_to_match(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Match>, StoreError> {
        let query = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_match).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Match>, StoreError> {
        let query = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY created_at DESC");
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_match).collect()
    }

    async fn list_live(&self) -> Result<Vec<Match>, StoreError> {
        let query = format!(
            "SELECT {MATCH_COLUMNS} FROM matches
             WHERE status = 'live'
             ORDER BY start_time DESC NULLS LAST"
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_match).collect()
    }

    async fn update(&self, match_: &Match) -> Result<Match, StoreError> {
        let query = format!(
            "UPDATE matches SET
                home_score = $2, away_score = $3, status = $4,
                events = $5, start_time = $6, end_time = $7, updated_at = NOW()
             WHERE id = $1
             RETURNING {MATCH_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(match_.id)
            .bind(match_.home_score)
            .bind(match_.away_score)
            .bind(match_.status.as_str())
            .bind(serde_json::to_value(&match_.events)?)
            .bind(match_.start_time)
            .bind(match_.end_time)
            .fetch_one(&self.pool)
            .await?;

        row_to_match(&row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
