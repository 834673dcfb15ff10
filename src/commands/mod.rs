//! Report card command router.
//!
//! Turns a command name, an actor and a list of argument tokens into a
//! store call and a list of reply lines. Each verb lives in its own
//! submodule; shared checks and argument parsers live here and in
//! [`parse`].

mod add;
mod edit;
mod id;
mod list;
pub mod parse;
mod reload;
mod remove;

use std::fmt::Display;
use std::sync::Arc;
use tracing::{Instrument, debug, warn};

use crate::actor::{Actor, Permission};
use crate::context::Context;
use crate::error::CommandError;
use crate::telemetry::spans;

/// Result of running one command.
///
/// `success = false` tells the host to print usage help. It is not an
/// exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub messages: Vec<String>,
}

impl CommandOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            messages: Vec::new(),
        }
    }
}

/// The report card commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Edit,
    Reload,
    List,
    Id,
    Remove,
}

impl Verb {
    pub const ALL: [Verb; 6] = [
        Verb::Add,
        Verb::Edit,
        Verb::Reload,
        Verb::List,
        Verb::Id,
        Verb::Remove,
    ];

    /// Resolve a command name, with or without the `rc` prefix, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let bare = lower.strip_prefix("rc").unwrap_or(&lower);
        match bare {
            "add" => Some(Verb::Add),
            "edit" => Some(Verb::Edit),
            "reload" => Some(Verb::Reload),
            "list" => Some(Verb::List),
            "id" => Some(Verb::Id),
            "remove" => Some(Verb::Remove),
            _ => None,
        }
    }

    /// Registered command name.
    pub fn name(self) -> &'static str {
        match self {
            Verb::Add => "rcadd",
            Verb::Edit => "rcedit",
            Verb::Reload => "rcreload",
            Verb::List => "rclist",
            Verb::Id => "rcid",
            Verb::Remove => "rcremove",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Verb::Add => "/rcadd [points] <player> <reason...>",
            Verb::Edit => "/rcedit #<id> [points] <player> <reason...>",
            Verb::Reload => "/rcreload",
            Verb::List => "/rclist [player]",
            Verb::Id => "/rcid #<id>",
            Verb::Remove => "/rcremove #<id>",
        }
    }
}

/// Routes report card commands to their handlers.
pub struct CommandRouter {
    ctx: Arc<Context>,
}

impl CommandRouter {
    pub fn new(ctx: Arc<Context>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Arc<Context> {
        &self.ctx
    }

    /// Run `command` for `actor`.
    ///
    /// Unknown commands are not ours to answer and succeed silently.
    pub async fn execute(&self, actor: &dyn Actor, command: &str, args: &[&str]) -> CommandOutcome {
        let Some(verb) = Verb::from_name(command) else {
            debug!(command = %command, "Ignoring unknown command");
            return CommandOutcome::ok();
        };

        let span = spans::command(verb.name(), actor.identity(), args.first().copied());
        async {
            match verb {
                Verb::Add => self.handle_add(actor, args).await,
                Verb::Edit => self.handle_edit(actor, args).await,
                Verb::Reload => self.handle_reload(actor),
                Verb::List => self.handle_list(actor, args).await,
                Verb::Id => self.handle_id(actor, args).await,
                Verb::Remove => self.handle_remove(actor, args).await,
            }
        }
        .instrument(span)
        .await
    }

    // ========== Shared checks and reply helpers ==========

    /// Permission first, then arity.
    pub(crate) fn check_perm_args(
        &self,
        actor: &dyn Actor,
        permission: Permission,
        min_args: usize,
        arg_count: usize,
    ) -> Result<(), CommandError> {
        if !actor.has_capability(permission) {
            return Err(CommandError::PermissionDenied(permission));
        }
        if arg_count < min_args {
            return Err(CommandError::InsufficientArguments {
                required: min_args,
                given: arg_count,
            });
        }
        Ok(())
    }

    /// Append a translated line.
    fn say(&self, out: &mut CommandOutcome, key: &str, args: &[&dyn Display]) {
        out.messages.push(self.ctx.tl(key, args));
    }

    /// Report an error to the actor without failing the command.
    fn notify(&self, out: &mut CommandOutcome, err: &CommandError) {
        match err {
            CommandError::Store(e) => {
                warn!(error = %e, code = err.error_code(), "Report store call failed");
            }
            CommandError::Reload(e) => {
                warn!(error = %e, code = err.error_code(), "Reload failed");
            }
            _ => debug!(code = err.error_code(), reason = %err, "Command rejected"),
        }
        if let Some(key) = err.message_key() {
            self.say(out, key, &[]);
        }
    }

    /// Report an error and fail the command.
    fn fail(&self, mut out: CommandOutcome, err: CommandError) -> CommandOutcome {
        self.notify(&mut out, &err);
        out.success = false;
        out
    }

    /// Parse `args[0]` as a report id, emitting any malformed-id warnings.
    ///
    /// Malformed ids do not abort: a non-numeric id becomes 0.
    fn report_id(&self, out: &mut CommandOutcome, args: &[&str]) -> i64 {
        let token = args.first().copied().unwrap_or_default();
        let parsed = parse::parse_report_id(token);
        for issue in parsed.issues {
            self.notify(out, &CommandError::MalformedReportId(issue));
        }
        parsed.id
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Router fixtures shared by the per-verb tests.

    use super::*;
    use crate::config::Config;
    use crate::db::{Database, DbError, ReportDraft, ReportRecord, ReportStore};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Wraps a real database, counting writes and optionally failing them.
    pub struct RecordingStore {
        pub db: Database,
        pub fail_writes: AtomicBool,
        pub adds: AtomicUsize,
        pub edits: AtomicUsize,
        pub deletes: AtomicUsize,
    }

    impl RecordingStore {
        pub fn writes(&self) -> usize {
            self.adds.load(Ordering::SeqCst)
                + self.edits.load(Ordering::SeqCst)
                + self.deletes.load(Ordering::SeqCst)
        }

        fn check(&self) -> Result<(), DbError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DbError::Internal("simulated I/O failure".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ReportStore for RecordingStore {
        async fn add_report(&self, draft: &ReportDraft) -> Result<i64, DbError> {
            self.adds.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.db.add_report(draft).await
        }

        async fn edit_report(&self, record: &ReportRecord) -> Result<(), DbError> {
            self.edits.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.db.edit_report(record).await
        }

        async fn get_report(&self, id: i64) -> Result<Option<ReportRecord>, DbError> {
            self.db.get_report(id).await
        }

        async fn get_reports(&self, player_name: &str) -> Result<Vec<ReportRecord>, DbError> {
            self.db.get_reports(player_name).await
        }

        async fn delete_report(&self, id: i64) -> Result<(), DbError> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.db.delete_report(id).await
        }
    }

    /// A router over a fresh in-memory database with default config.
    pub async fn router() -> (CommandRouter, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore {
            db: Database::new(":memory:").await.unwrap(),
            fail_writes: AtomicBool::new(false),
            adds: AtomicUsize::new(0),
            edits: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        });
        let ctx = Context::new(Config::default(), None, store.clone()).unwrap();
        (CommandRouter::new(Arc::new(ctx)), store)
    }

    /// Store a report directly, bypassing the router.
    pub async fn seed(store: &RecordingStore, player: &str, points: i32, reason: &str) -> i64 {
        store
            .db
            .add_report(&ReportDraft {
                player_name: player.to_string(),
                reporter_name: "Seeder".to_string(),
                points,
                reason: reason.to_string(),
            })
            .await
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::router;
    use super::*;
    use crate::actor::{ConsoleActor, PlayerActor};

    #[test]
    fn verb_names_resolve_with_and_without_prefix() {
        for verb in Verb::ALL {
            assert_eq!(Verb::from_name(verb.name()), Some(verb));
            assert_eq!(Verb::from_name(&verb.name().to_uppercase()), Some(verb));
        }
        assert_eq!(Verb::from_name("add"), Some(Verb::Add));
        assert_eq!(Verb::from_name("Remove"), Some(Verb::Remove));
        assert_eq!(Verb::from_name("rcfly"), None);
        assert_eq!(Verb::from_name("rc"), None);
    }

    #[tokio::test]
    async fn unknown_command_is_a_silent_success() {
        let (router, _) = router().await;
        let outcome = router.execute(&ConsoleActor, "rcteleport", &["Steve"]).await;
        assert!(outcome.success);
        assert!(outcome.messages.is_empty());
    }

    #[tokio::test]
    async fn check_perm_args_checks_permission_first() {
        let (router, _) = router().await;
        let nobody = PlayerActor::new("Nobody", []);
        assert!(matches!(
            router.check_perm_args(&nobody, Permission::Edit, 2, 0),
            Err(CommandError::PermissionDenied(Permission::Edit))
        ));
        assert!(matches!(
            router.check_perm_args(&ConsoleActor, Permission::Edit, 2, 1),
            Err(CommandError::InsufficientArguments { required: 2, given: 1 })
        ));
        assert!(router.check_perm_args(&ConsoleActor, Permission::Edit, 2, 2).is_ok());
    }
}
