//! `rcremove #<id>`

use super::{CommandOutcome, CommandRouter};
use crate::actor::{Actor, Permission};
use crate::error::CommandError;
use tracing::info;

impl CommandRouter {
    /// Remove a report card from listings.
    ///
    /// An unknown id is reported but does not fail the command.
    pub(super) async fn handle_remove(&self, actor: &dyn Actor, args: &[&str]) -> CommandOutcome {
        let mut out = CommandOutcome::ok();

        if let Err(e) = self.check_perm_args(actor, Permission::Admin, 1, args.len()) {
            return self.fail(out, e);
        }

        let report_id = self.report_id(&mut out, args);

        match self.ctx.store().get_report(report_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.notify(&mut out, &CommandError::NotFound(report_id));
                return out;
            }
            Err(e) => return self.fail(out, e.into()),
        }

        match self.ctx.store().delete_report(report_id).await {
            Ok(()) => {
                info!(id = report_id, by = %actor.identity(), "Report removed");
                self.say(&mut out, "reportDeleted", &[&report_id]);
                out
            }
            Err(e) => self.fail(out, e.into()),
        }
    }
}
