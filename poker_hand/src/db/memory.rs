//! In-memory tournament repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::errors::StoreResult;
use super::repository::{TournamentFilter, TournamentRepository};
use crate::tournament::{TournamentId, TournamentRecord};

/// `TournamentRepository` backed by a map, for tests and database-less runs
#[derive(Default)]
pub struct MemoryTournamentRepository {
    records: RwLock<BTreeMap<TournamentId, TournamentRecord>>,
}

impl MemoryTournamentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TournamentRepository for MemoryTournamentRepository {
    async fn save_tournament(&self, record: &TournamentRecord) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Ok(false);
        }
        records.insert(record.id.clone(), record.clone());
        Ok(true)
    }

    async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
    ) -> StoreResult<Vec<TournamentRecord>> {
        let records = self.records.read().await;
        let mut listed: Vec<TournamentRecord> = records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.started.cmp(&b.started).then_with(|| a.id.cmp(&b.id)));
        Ok(listed)
    }

    async fn mark_free(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(record) => {
                record.free = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
