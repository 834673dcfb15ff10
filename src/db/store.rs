use super::{Database, DbError, ReportDraft, ReportRecord};
use async_trait::async_trait;

/// Record store consumed by the command router.
///
/// Implementations own persistence, id assignment and what "delete" means;
/// the router only relies on the shapes below.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a new report and return its assigned id.
    async fn add_report(&self, draft: &ReportDraft) -> Result<i64, DbError>;

    /// Persist new points/reason for the report identified by `record.id`.
    async fn edit_report(&self, record: &ReportRecord) -> Result<(), DbError>;

    async fn get_report(&self, id: i64) -> Result<Option<ReportRecord>, DbError>;

    /// Every report for a player, in id order. May be empty.
    async fn get_reports(&self, player_name: &str) -> Result<Vec<ReportRecord>, DbError>;

    async fn delete_report(&self, id: i64) -> Result<(), DbError>;
}

#[async_trait]
impl ReportStore for Database {
    async fn add_report(&self, draft: &ReportDraft) -> Result<i64, DbError> {
        self.reports().create(draft).await
    }

    async fn edit_report(&self, record: &ReportRecord) -> Result<(), DbError> {
        self.reports().update(record).await
    }

    async fn get_report(&self, id: i64) -> Result<Option<ReportRecord>, DbError> {
        self.reports().find_by_id(id).await
    }

    async fn get_reports(&self, player_name: &str) -> Result<Vec<ReportRecord>, DbError> {
        self.reports().find_by_player(player_name).await
    }

    async fn delete_report(&self, id: i64) -> Result<(), DbError> {
        self.reports().deactivate(id).await
    }
}
