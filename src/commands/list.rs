//! `rclist [player]`

use super::{CommandOutcome, CommandRouter};
use crate::actor::{Actor, Permission};
use crate::error::CommandError;

impl CommandRouter {
    /// List a player's active report cards.
    ///
    /// Admins see points, reporter and time; holders of the plain list
    /// permission only see id and reason. Actors with neither get nothing.
    pub(super) async fn handle_list(&self, actor: &dyn Actor, args: &[&str]) -> CommandOutcome {
        let mut out = CommandOutcome::ok();

        let target = match args.first() {
            Some(player) if actor.has_capability(Permission::ListOthers) => player.to_string(),
            _ => actor.identity().to_string(),
        };

        let full = if actor.has_capability(Permission::Admin) {
            true
        } else if actor.has_capability(Permission::List) {
            false
        } else {
            return out;
        };

        let reports = match self.ctx.store().get_reports(&target).await {
            Ok(reports) => reports,
            Err(e) => return self.fail(out, e.into()),
        };

        if reports.is_empty() {
            self.notify(&mut out, &CommandError::NoReports(target));
            return out;
        }

        self.say(&mut out, "reportsFound", &[&reports.len()]);

        if full {
            self.say(&mut out, "reportFullTop", &[&target]);
            for r in reports.iter().filter(|r| r.active) {
                self.say(
                    &mut out,
                    "reportLineFull",
                    &[&r.id, &r.points, &r.reason, &r.reporter_name, &r.time_string()],
                );
            }
            self.say(&mut out, "reportFullBottom", &[&target]);
        } else {
            for r in reports.iter().filter(|r| r.active) {
                self.say(&mut out, "reportLineLite", &[&r.id, &r.reason]);
            }
        }

        out
    }
}
