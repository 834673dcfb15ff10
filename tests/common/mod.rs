//! Console session harness.
//!
//! Spawns the reportcard binary against a throwaway data directory and
//! talks to it over stdin/stdout.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::timeout;

/// A data directory with a config file, removed on drop.
pub struct TestInstance {
    dir: tempfile::TempDir,
}

impl TestInstance {
    /// Create an instance whose config is `extra` appended to a database block.
    pub fn new(extra: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let instance = Self { dir };
        instance.write_config(extra)?;
        Ok(instance)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("reportcard.toml")
    }

    /// Rewrite the config file, keeping the database block.
    pub fn write_config(&self, extra: &str) -> anyhow::Result<()> {
        let config = format!(
            "[database]\npath = \"{}\"\n\n{}",
            self.dir.path().join("reportcard.db").display(),
            extra
        );
        std::fs::write(self.config_path(), config)?;
        Ok(())
    }

    /// Start an interactive console.
    pub fn spawn(&self) -> anyhow::Result<RunningConsole> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_reportcard"))
            .arg(self.config_path())
            .env("RUST_LOG", "warn")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow::anyhow!("stdout not captured"))?;

        Ok(RunningConsole {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
        })
    }

    /// Run a whole scripted session and return its stdout lines.
    pub async fn session(&self, script: &str) -> anyhow::Result<Vec<String>> {
        let mut console = self.spawn()?;
        console.stdin.write_all(script.as_bytes()).await?;
        console.finish().await
    }
}

/// A running console process.
pub struct RunningConsole {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl RunningConsole {
    /// Send one command line.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }

    /// Receive the next reply line.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        match timeout(Duration::from_secs(5), self.stdout.next_line()).await {
            Ok(Ok(Some(line))) => Ok(line),
            Ok(Ok(None)) => anyhow::bail!("console closed stdout"),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => anyhow::bail!("timed out waiting for a reply"),
        }
    }

    /// Close stdin, collect the remaining output, and check the exit status.
    pub async fn finish(mut self) -> anyhow::Result<Vec<String>> {
        drop(self.stdin);

        let mut rest = Vec::new();
        while let Some(line) = self.stdout.next_line().await? {
            rest.push(line);
        }

        let status = self.child.wait().await?;
        anyhow::ensure!(status.success(), "reportcard exited with {}", status);
        Ok(rest)
    }
}
