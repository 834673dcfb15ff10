//! `rcedit #<id> [points] <player> <reason...>`

use super::parse::parse_report;
use super::{CommandOutcome, CommandRouter};
use crate::actor::{Actor, Permission};
use crate::error::CommandError;
use tracing::info;

impl CommandRouter {
    /// Replace the points and reason of an existing report card.
    ///
    /// The player token is required for shape but ignored: a report never
    /// moves to another player.
    pub(super) async fn handle_edit(&self, actor: &dyn Actor, args: &[&str]) -> CommandOutcome {
        let mut out = CommandOutcome::ok();

        if let Err(e) = self.check_perm_args(actor, Permission::Edit, 2, args.len()) {
            return self.fail(out, e);
        }

        let report_id = self.report_id(&mut out, args);

        let mut record = match self.ctx.store().get_report(report_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return self.fail(out, CommandError::NotFound(report_id)),
            Err(e) => return self.fail(out, e.into()),
        };

        let draft = match parse_report(args, 1, actor.identity()) {
            Ok(draft) => draft,
            Err(e) => return self.fail(out, e),
        };
        record.reason = draft.reason;
        record.points = draft.points;

        match self.ctx.store().edit_report(&record).await {
            Ok(()) => {
                info!(
                    id = record.id,
                    points = record.points,
                    by = %actor.identity(),
                    "Report edited"
                );
                self.say(&mut out, "reportEditSuccess", &[]);
                out
            }
            Err(e) => self.fail(out, e.into()),
        }
    }
}
