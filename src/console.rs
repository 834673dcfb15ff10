//! Console session: reads command lines, runs them, prints replies.
//!
//! Line grammar: `[as <player>] [/]<command> [args...]`. Commands run as
//! the console unless prefixed with `as <player>`, in which case the
//! player's configured permissions apply.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::actor::{Actor, ConsoleActor, PlayerActor};
use crate::commands::{CommandRouter, Verb};

const AS_USAGE: &str = "Usage: as <player> <command> [args...]";

/// One parsed console line.
#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleLine<'a> {
    Empty,
    Quit,
    /// `as` without a player or command.
    BadImpersonation,
    Command {
        player: Option<&'a str>,
        name: &'a str,
        args: Vec<&'a str>,
    },
}

pub fn parse_line(line: &str) -> ConsoleLine<'_> {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return ConsoleLine::Empty;
    };

    if first.eq_ignore_ascii_case("quit") || first.eq_ignore_ascii_case("exit") {
        return ConsoleLine::Quit;
    }

    let (player, name) = if first.eq_ignore_ascii_case("as") {
        match (parts.next(), parts.next()) {
            (Some(player), Some(name)) => (Some(player), name),
            _ => return ConsoleLine::BadImpersonation,
        }
    } else {
        (None, first)
    };

    ConsoleLine::Command {
        player,
        name: name.strip_prefix('/').unwrap_or(name),
        args: parts.collect(),
    }
}

/// Run a session until `quit` or end of input.
pub async fn run<R, W>(router: &CommandRouter, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let (player, name, args) = match parse_line(&line) {
            ConsoleLine::Empty => continue,
            ConsoleLine::Quit => break,
            ConsoleLine::BadImpersonation => {
                write_line(&mut output, AS_USAGE).await?;
                continue;
            }
            ConsoleLine::Command { player, name, args } => (player, name, args),
        };

        let player_actor = match player {
            Some(player) => match router.context().config().find_player(player) {
                Some(block) => Some(PlayerActor::from_block(block)),
                None => {
                    write_line(&mut output, &format!("Unknown player: {player}")).await?;
                    continue;
                }
            },
            None => None,
        };
        let actor: &dyn Actor = match player_actor {
            Some(ref p) => p,
            None => &ConsoleActor,
        };

        debug!(actor = %actor.identity(), command = %name, "Console command");
        let outcome = router.execute(actor, name, &args).await;

        for message in &outcome.messages {
            write_line(&mut output, message).await?;
        }
        if !outcome.success
            && let Some(verb) = Verb::from_name(name)
        {
            write_line(&mut output, &format!("Usage: {}", verb.usage())).await?;
        }
    }

    output.flush().await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
