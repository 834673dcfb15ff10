//! Report card repository.
//!
//! Handles creating, editing, listing and deactivating report records.

use super::DbError;
use sqlx::SqlitePool;

/// A persisted report card entry against a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: i64,
    pub player_name: String,
    pub reporter_name: String,
    pub points: i32,
    pub reason: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ReportRecord {
    /// Display string for the creation / last-edit time.
    pub fn time_string(&self) -> String {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_opt(self.updated_at, 0)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// A report that has been parsed from command arguments but not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub player_name: String,
    pub reporter_name: String,
    pub points: i32,
    pub reason: String,
}

type ReportRow = (i64, String, String, i32, String, bool, i64, i64);

impl From<ReportRow> for ReportRecord {
    fn from(
        (id, player_name, reporter_name, points, reason, active, created_at, updated_at): ReportRow,
    ) -> Self {
        Self {
            id,
            player_name,
            reporter_name,
            points,
            reason,
            active,
            created_at,
            updated_at,
        }
    }
}

/// Repository for report operations.
pub struct ReportRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReportRepository<'a> {
    /// Create a new report repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new report, returning the id assigned to it.
    pub async fn create(&self, draft: &ReportDraft) -> Result<i64, DbError> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO reports (player_name, reporter_name, points, reason, active, created_at, updated_at)
            VALUES (?, ?, ?, ?, 1, ?, ?)
            "#,
        )
        .bind(&draft.player_name)
        .bind(&draft.reporter_name)
        .bind(draft.points)
        .bind(&draft.reason)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite the points and reason of an existing report.
    ///
    /// Id, player and reporter are left untouched; the edit time is bumped.
    pub async fn update(&self, record: &ReportRecord) -> Result<(), DbError> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            UPDATE reports
            SET points = ?, reason = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(record.points)
        .bind(&record.reason)
        .bind(now)
        .bind(record.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::ReportNotFound(record.id));
        }
        Ok(())
    }

    /// Find a report by id, active or not.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ReportRecord>, DbError> {
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, player_name, reporter_name, points, reason, active, created_at, updated_at
            FROM reports
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(ReportRecord::from))
    }

    /// All reports filed against a player, oldest first.
    pub async fn find_by_player(&self, player_name: &str) -> Result<Vec<ReportRecord>, DbError> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, player_name, reporter_name, points, reason, active, created_at, updated_at
            FROM reports
            WHERE player_name = ? COLLATE NOCASE
            ORDER BY id ASC
            "#,
        )
        .bind(player_name)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ReportRecord::from).collect())
    }

    /// Mark a report inactive. The row stays so its id is never handed out again.
    pub async fn deactivate(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE reports SET active = 0 WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::ReportNotFound(id));
        }
        Ok(())
    }
}
