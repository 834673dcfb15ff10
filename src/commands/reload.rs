//! `rcreload`

use super::{CommandOutcome, CommandRouter};
use crate::actor::{Actor, Permission};
use crate::error::CommandError;

impl CommandRouter {
    /// Reload configuration and messages from disk.
    ///
    /// Unauthorized callers are refused with `false`.
    pub(super) fn handle_reload(&self, actor: &dyn Actor) -> CommandOutcome {
        let mut out = CommandOutcome::ok();

        if let Err(e) = self.check_perm_args(actor, Permission::Admin, 0, 0) {
            return self.fail(out, e);
        }

        if let Err(e) = self.ctx.reload() {
            return self.fail(out, CommandError::Reload(e.to_string()));
        }

        tracing::info!(by = %actor.identity(), "Report card configuration reloaded");
        self.say(&mut out, "reloadSuccess", &[]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::router;
    use crate::actor::{ConsoleActor, Permission, PlayerActor};

    #[tokio::test]
    async fn reload_succeeds_for_admin() {
        let (router, _) = router().await;
        let outcome = router.execute(&ConsoleActor, "rcreload", &[]).await;
        assert!(outcome.success);
        assert_eq!(
            outcome.messages,
            vec!["Report card configuration reloaded.".to_string()]
        );
    }

    #[tokio::test]
    async fn reload_refuses_non_admin() {
        let (router, _) = router().await;
        let player = PlayerActor::new("Steve", [Permission::Edit, Permission::List]);
        let outcome = router.execute(&player, "reload", &[]).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.messages,
            vec!["You do not have permission to do this!".to_string()]
        );
    }
}
