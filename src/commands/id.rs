//! `rcid #<id>`

use super::{CommandOutcome, CommandRouter};
use crate::actor::{Actor, Permission};
use crate::error::CommandError;

impl CommandRouter {
    /// Show one report card in full, whether or not it is still active.
    pub(super) async fn handle_id(&self, actor: &dyn Actor, args: &[&str]) -> CommandOutcome {
        let mut out = CommandOutcome::ok();

        if let Err(e) = self.check_perm_args(actor, Permission::Admin, 0, args.len()) {
            return self.fail(out, e);
        }
        if args.is_empty() {
            return out;
        }

        let report_id = self.report_id(&mut out, args);

        let record = match self.ctx.store().get_report(report_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return self.fail(out, CommandError::NotFound(report_id)),
            Err(e) => return self.fail(out, e.into()),
        };

        self.say(&mut out, "reportIdTop", &[&actor.identity()]);
        self.say(
            &mut out,
            "reportLineFull",
            &[
                &record.id,
                &record.points,
                &record.reason,
                &record.reporter_name,
                &record.time_string(),
            ],
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{router, seed};
    use crate::actor::{ConsoleActor, Permission, PlayerActor};
    use crate::db::ReportStore;

    #[tokio::test]
    async fn id_shows_full_record() {
        let (router, store) = router().await;
        let id = seed(&store, "Steve", 2, "xray").await;

        let token = format!("#{id}");
        let outcome = router.execute(&ConsoleActor, "rcid", &[token.as_str()]).await;
        assert!(outcome.success);
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[0], "----- Report card lookup by CONSOLE -----");
        assert!(outcome.messages[1].starts_with(&format!("#{id} [2 pts] xray - by Seeder on ")));
    }

    #[tokio::test]
    async fn id_finds_inactive_records() {
        let (router, store) = router().await;
        let id = seed(&store, "Steve", 2, "xray").await;
        store.db.delete_report(id).await.unwrap();

        let token = format!("#{id}");
        let outcome = router.execute(&ConsoleActor, "rcid", &[token.as_str()]).await;
        assert!(outcome.success);
        assert!(outcome.messages[1].contains("xray"));
    }

    #[tokio::test]
    async fn id_without_argument_is_silent() {
        let (router, _) = router().await;
        let outcome = router.execute(&ConsoleActor, "rcid", &[]).await;
        assert!(outcome.success);
        assert!(outcome.messages.is_empty());
    }

    #[tokio::test]
    async fn id_not_found_fails() {
        let (router, _) = router().await;
        let outcome = router.execute(&ConsoleActor, "rcid", &["#404"]).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.messages,
            vec!["No report card exists with that id.".to_string()]
        );
    }

    #[tokio::test]
    async fn id_requires_admin() {
        let (router, store) = router().await;
        let id = seed(&store, "Steve", 2, "xray").await;
        let lister = PlayerActor::new("Helper", [Permission::List, Permission::ListOthers]);

        let token = format!("#{id}");
        let outcome = router.execute(&lister, "rcid", &[token.as_str()]).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.messages,
            vec!["You do not have permission to do this!".to_string()]
        );
    }
}
