//! Error handling for report card commands.
//!
//! Every command failure is recovered at the operation boundary and turned
//! into a locale message plus a `false` outcome. Store failures carry no
//! user-visible text.

use crate::actor::Permission;
use crate::db::DbError;
use thiserror::Error;

/// Ways a report id argument can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedId {
    /// The token does not start with `#`. Parsing continues.
    MissingPrefix,
    /// The digits after the prefix are not an integer. The id becomes 0.
    NotANumber,
}

/// Errors that can occur while handling a report card command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing permission {0}")]
    PermissionDenied(Permission),

    #[error("not enough arguments: {given} given, {required} required")]
    InsufficientArguments { required: usize, given: usize },

    #[error("malformed report id: {0:?}")]
    MalformedReportId(MalformedId),

    #[error("report #{0} not found")]
    NotFound(i64),

    #[error("no reports found for {0}")]
    NoReports(String),

    #[error("store error: {0}")]
    Store(#[from] DbError),

    #[error("reload failed: {0}")]
    Reload(String),
}

impl CommandError {
    /// Locale key of the message shown to the actor.
    ///
    /// Returns `None` for errors that don't warrant a user-visible reply.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::PermissionDenied(_) => Some("errNoPermission"),
            Self::InsufficientArguments { .. } => Some("errNotEnoughArguments"),
            Self::MalformedReportId(MalformedId::MissingPrefix) => Some("errReportIdInvalidPrefix"),
            Self::MalformedReportId(MalformedId::NotANumber) => Some("errReportIdNotANumber"),
            Self::NotFound(_) => Some("errReportIdNotFound"),
            Self::NoReports(_) => Some("errNoReportsFound"),
            Self::Reload(_) => Some("errReloadFailed"),
            Self::Store(_) => None,
        }
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied(_) => "permission_denied",
            Self::InsufficientArguments { .. } => "insufficient_arguments",
            Self::MalformedReportId(_) => "malformed_report_id",
            Self::NotFound(_) => "not_found",
            Self::NoReports(_) => "no_reports",
            Self::Store(_) => "store_failure",
            Self::Reload(_) => "reload_failed",
        }
    }
}
