use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::matches::Match;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryMatchRepository;
pub use postgres::PgMatchRepository;

/// Persistent store for the match aggregate.
///
/// Every write is a whole-aggregate operation: `update` replaces scores,
/// status, timestamps and the embedded event list in one step, so an
/// observer never sees an appended event without its score change. The
/// store refreshes `updated_at` on insert and update.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn insert(&self, match_: &Match) -> Result<Match, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Match>, StoreError>;

    /// All matches, newest first (`created_at` descending).
    async fn list_all(&self) -> Result<Vec<Match>, StoreError>;

    /// All currently live matches, most recently started first
    /// (`start_time` descending).
    async fn list_live(&self) -> Result<Vec<Match>, StoreError>;

    async fn update(&self, match_: &Match) -> Result<Match, StoreError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
