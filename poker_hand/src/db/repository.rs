//! Repository trait for tournament results.
//!
//! The trait keeps the importer and the HTTP API independent of PostgreSQL so
//! they can be exercised against [`MemoryTournamentRepository`](super::MemoryTournamentRepository).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::errors::{StoreError, StoreResult};
use super::timeouts::{with_default_timeout, with_long_timeout};
use crate::tournament::{TournamentId, TournamentRecord, TournamentType};

/// Listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentFilter {
    /// Only the tournament with this id
    pub id: Option<TournamentId>,
}

impl TournamentFilter {
    /// Restrict the listing to one tournament id
    pub fn with_id(mut self, id: impl Into<TournamentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether a record passes this filter
    pub fn matches(&self, record: &TournamentRecord) -> bool {
        self.id.as_ref().is_none_or(|id| *id == record.id)
    }
}

/// Trait for tournament repository operations
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Store a record unless one with the same id exists
    ///
    /// Returns `true` only when a new row was inserted.
    async fn save_tournament(&self, record: &TournamentRecord) -> StoreResult<bool>;

    /// List records ordered by start time
    async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
    ) -> StoreResult<Vec<TournamentRecord>>;

    /// Mark a stored record as a free entry
    ///
    /// Returns `false` when no record has this id.
    async fn mark_free(&self, id: &str) -> StoreResult<bool>;

    /// Find one record by id
    async fn get_tournament(&self, id: &str) -> StoreResult<Option<TournamentRecord>> {
        let filter = TournamentFilter::default().with_id(id);
        Ok(self.list_tournaments(&filter).await?.into_iter().next())
    }

    /// Mark a record free, failing with `NotFound` when absent
    async fn free_tournament(&self, id: &str) -> StoreResult<()> {
        if self.mark_free(id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id.to_string()))
        }
    }
}

/// PostgreSQL implementation of `TournamentRepository`
#[derive(Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `tournaments` table if it does not exist
    pub async fn create_schema(&self) -> StoreResult<()> {
        with_long_timeout(
            sqlx::query(
                r#"
                CREATE TABLE IF NOT EXISTS tournaments (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    kind TEXT NOT NULL,
                    buy_in DOUBLE PRECISION NOT NULL,
                    players BIGINT NOT NULL,
                    total_prize_pool DOUBLE PRECISION NOT NULL,
                    started TIMESTAMPTZ NOT NULL,
                    my_place BIGINT NOT NULL,
                    my_prize DOUBLE PRECISION NOT NULL,
                    reentries BIGINT NOT NULL,
                    free BOOLEAN NOT NULL DEFAULT FALSE
                )
                "#,
            )
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn save_tournament(&self, record: &TournamentRecord) -> StoreResult<bool> {
        let result = with_default_timeout(
            sqlx::query(
                r#"
                INSERT INTO tournaments (id, name, kind, buy_in, players, total_prize_pool,
                                         started, my_place, my_prize, reentries, free)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&record.id)
            .bind(&record.name)
            .bind(record.kind.as_str())
            .bind(record.buy_in)
            .bind(i64::from(record.players))
            .bind(record.total_prize_pool)
            .bind(record.started)
            .bind(i64::from(record.my_place))
            .bind(record.my_prize)
            .bind(i64::from(record.reentries))
            .bind(record.free)
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
    ) -> StoreResult<Vec<TournamentRecord>> {
        let rows = with_long_timeout(
            sqlx::query(
                "SELECT id, name, kind, buy_in, players, total_prize_pool, started,
                        my_place, my_prize, reentries, free
                 FROM tournaments
                 WHERE ($1::TEXT IS NULL OR id = $1)
                 ORDER BY started, id",
            )
            .bind(filter.id.as_deref())
            .fetch_all(&self.pool),
        )
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn mark_free(&self, id: &str) -> StoreResult<bool> {
        let result = with_default_timeout(
            sqlx::query("UPDATE tournaments SET free = TRUE WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn record_from_row(row: &PgRow) -> StoreResult<TournamentRecord> {
    let id: String = row.try_get("id")?;
    let corrupt = |reason: String| StoreError::Corrupt {
        id: id.clone(),
        reason,
    };

    let kind: String = row.try_get("kind")?;
    let kind: TournamentType = kind.parse().map_err(|e| corrupt(format!("{e}")))?;
    let count = |column: &str| -> StoreResult<u32> {
        let value: i64 = row.try_get(column)?;
        u32::try_from(value).map_err(|_| corrupt(format!("{column} out of range: {value}")))
    };

    Ok(TournamentRecord {
        name: row.try_get("name")?,
        kind,
        buy_in: row.try_get("buy_in")?,
        players: count("players")?,
        total_prize_pool: row.try_get("total_prize_pool")?,
        started: row.try_get::<DateTime<Utc>, _>("started")?,
        my_place: count("my_place")?,
        my_prize: row.try_get("my_prize")?,
        reentries: count("reentries")?,
        free: row.try_get("free")?,
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str) -> TournamentRecord {
        TournamentRecord {
            id: id.to_string(),
            name: format!("Tournament #{id}, Turbo $1, Hold'em No Limit"),
            kind: TournamentType::Turbo,
            buy_in: 1.0,
            players: 50,
            total_prize_pool: 45.0,
            started: Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap(),
            my_place: 3,
            my_prize: 6.5,
            reentries: 0,
            free: false,
        }
    }

    #[test]
    fn test_filter_matches() {
        let all = TournamentFilter::default();
        assert!(all.matches(&record("1")));

        let one = TournamentFilter::default().with_id("1");
        assert!(one.matches(&record("1")));
        assert!(!one.matches(&record("2")));
    }
}
