//! `rcadd [points] <player> <reason...>`

use super::parse::parse_report;
use super::{CommandOutcome, CommandRouter};
use crate::actor::{Actor, Permission};
use tracing::info;

impl CommandRouter {
    /// File a new report card.
    pub(super) async fn handle_add(&self, actor: &dyn Actor, args: &[&str]) -> CommandOutcome {
        let mut out = CommandOutcome::ok();

        if let Err(e) = self.check_perm_args(actor, Permission::Edit, 2, args.len()) {
            return self.fail(out, e);
        }

        let draft = match parse_report(args, 0, actor.identity()) {
            Ok(draft) => draft,
            Err(e) => return self.fail(out, e),
        };

        match self.ctx.store().add_report(&draft).await {
            Ok(id) => {
                info!(
                    id = id,
                    player = %draft.player_name,
                    points = draft.points,
                    by = %draft.reporter_name,
                    "Report added"
                );
                self.say(&mut out, "reportAddSuccess", &[]);
                out
            }
            Err(e) => self.fail(out, e.into()),
        }
    }
}
